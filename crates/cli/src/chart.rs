use comfy_table::Table;
use stockview_core::page::ChartCollaborator;
use stockview_core::view::CandlestickSpec;

// Terminal rows are scarce; only the latest candles are shown.
const MAX_ROWS: usize = 10;

/// Candlestick "chart" as a table of the most recent candles.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextChart;

impl TextChart {
    fn render(spec: &CandlestickSpec) -> Table {
        let mut table = Table::new();
        table.set_header(vec!["", "Date", "Open", "High", "Low", "Close"]);

        let start = spec.len().saturating_sub(MAX_ROWS);
        for i in start..spec.len() {
            let marker = match spec.is_increasing(i) {
                Some(true) => "▲",
                Some(false) => "▼",
                None => " ",
            };
            table.add_row(vec![
                marker.to_string(),
                spec.dates[i].clone(),
                format!("{:.2}", spec.open[i]),
                format!("{:.2}", spec.high[i]),
                format!("{:.2}", spec.low[i]),
                format!("{:.2}", spec.close[i]),
            ]);
        }
        table
    }
}

impl ChartCollaborator for TextChart {
    fn plot_candlestick(&self, spec: &CandlestickSpec) -> anyhow::Result<()> {
        if spec.is_empty() {
            println!("(no chart data)");
            return Ok(());
        }

        anyhow::ensure!(
            [spec.open.len(), spec.high.len(), spec.low.len(), spec.close.len()]
                .iter()
                .all(|&n| n == spec.len()),
            "candlestick series lengths differ"
        );

        println!(
            "Last {} of {} candles (up {}, down {}):",
            spec.len().min(MAX_ROWS),
            spec.len(),
            spec.increasing_color,
            spec.decreasing_color
        );
        println!("{}", Self::render(spec));
        Ok(())
    }
}
