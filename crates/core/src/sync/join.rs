use std::fmt;
use std::future::Future;

/// Which branch of a two-way join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => f.write_str("A"),
            Side::B => f.write_str("B"),
        }
    }
}

#[derive(Debug)]
pub struct JoinFailure {
    pub side: Side,
    pub error: anyhow::Error,
}

impl fmt::Display for JoinFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "side {} failed: {:#}", self.side, self.error)
    }
}

impl std::error::Error for JoinFailure {}

/// Drives both futures on the current task and returns both outputs in argument order.
///
/// Fails fast: the first branch to fail ends the join and the other branch is dropped.
pub async fn join_both<FA, FB, A, B>(a: FA, b: FB) -> Result<(A, B), JoinFailure>
where
    FA: Future<Output = anyhow::Result<A>>,
    FB: Future<Output = anyhow::Result<B>>,
{
    tokio::try_join!(
        async {
            a.await.map_err(|error| JoinFailure {
                side: Side::A,
                error,
            })
        },
        async {
            b.await.map_err(|error| JoinFailure {
                side: Side::B,
                error,
            })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    async fn after<T>(ms: u64, value: anyhow::Result<T>) -> anyhow::Result<T> {
        tokio::time::sleep(Duration::from_millis(ms)).await;
        value
    }

    #[tokio::test(start_paused = true)]
    async fn keeps_argument_order_when_b_finishes_first() {
        let (a, b) = join_both(after(50, Ok("A")), after(5, Ok("B"))).await.unwrap();
        assert_eq!((a, b), ("A", "B"));
    }

    #[tokio::test(start_paused = true)]
    async fn runs_branches_concurrently() {
        let started = tokio::time::Instant::now();
        join_both(after(40, Ok(())), after(40, Ok(()))).await.unwrap();
        assert!(started.elapsed() < Duration::from_millis(80));
    }

    #[tokio::test(start_paused = true)]
    async fn reports_failing_side() {
        let err = join_both(
            after(50, Ok::<_, anyhow::Error>(1)),
            after(5, Err::<i32, _>(anyhow::anyhow!("boom"))),
        )
        .await
        .unwrap_err();
        assert_eq!(err.side, Side::B);
        assert!(err.to_string().contains("boom"));
    }

    #[tokio::test(start_paused = true)]
    async fn fails_fast_without_waiting_for_slow_branch() {
        let started = tokio::time::Instant::now();
        let err = join_both(
            after(5, Err::<(), _>(anyhow::anyhow!("down"))),
            after(10_000, Ok(())),
        )
        .await
        .unwrap_err();
        assert_eq!(err.side, Side::A);
        assert!(started.elapsed() < Duration::from_secs(1));
    }
}
