//! Interactive recording loop: one line of input is one observation tick
//!
//! The two modes are separate code paths on purpose. Random mode records a
//! freshly drawn value per line; fixed mode records its two values once at
//! startup and then only consumes lines as pacing.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::recorder::ObservationSink;
use crate::core::constants::FIXED_OBSERVATIONS;

/// Random mode.
///
/// Displays the value the next tick will record, blocks for a line, records
/// the displayed value, then draws and displays the next one. Line content
/// is ignored; only line arrival matters. Ends on end-of-stream; a read
/// error is treated the same way. Returns the observation count.
pub async fn run_random<R, W, S, F>(
    input: R,
    output: &mut W,
    sink: &S,
    mut next_value: F,
) -> std::io::Result<u64>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    S: ObservationSink,
    F: FnMut() -> f64,
{
    let mut lines = input.lines();
    let mut recorded = 0u64;
    let mut value = next_value();

    loop {
        writeln!(output, "Last observation: {value}")?;
        output.flush()?;

        match lines.next_line().await {
            Ok(Some(_)) => {
                sink.record(value);
                recorded += 1;
                value = next_value();
            }
            Ok(None) => break,
            Err(e) => {
                tracing::debug!(error = %e, "Input read failed, stopping");
                break;
            }
        }
    }

    Ok(recorded)
}

/// Fixed mode.
///
/// Records the pre-seeded observations unconditionally before any input is
/// consumed, then reads lines purely to keep the process alive until
/// end-of-stream. Returns the observation count (always two).
pub async fn run_fixed<R, W, S>(input: R, output: &mut W, sink: &S) -> std::io::Result<u64>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    S: ObservationSink,
{
    for value in FIXED_OBSERVATIONS {
        writeln!(output, "Recorded observation: {value}")?;
        sink.record(value);
    }
    output.flush()?;

    let mut lines = input.lines();
    loop {
        writeln!(output, "Press enter to keep the process alive, Ctrl-D to exit")?;
        output.flush()?;

        match lines.next_line().await {
            Ok(Some(_)) => {}
            Ok(None) => break,
            Err(e) => {
                tracing::debug!(error = %e, "Input read failed, stopping");
                break;
            }
        }
    }

    Ok(FIXED_OBSERVATIONS.len() as u64)
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    use tokio::io::{AsyncRead, BufReader, ReadBuf};

    use super::super::recorder::testing::CapturingSink;
    use super::super::values::random_observations;
    use super::*;
    use crate::core::constants::RANDOM_VALUE_MAX;

    /// Reader whose first poll fails, to exercise the read-error path.
    struct FailingReader;

    impl AsyncRead for FailingReader {
        fn poll_read(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            _buf: &mut ReadBuf<'_>,
        ) -> Poll<io::Result<()>> {
            Poll::Ready(Err(io::Error::new(io::ErrorKind::BrokenPipe, "boom")))
        }
    }

    fn scripted(values: Vec<f64>) -> impl FnMut() -> f64 {
        let mut iter = values.into_iter();
        move || iter.next().expect("scripted value sequence exhausted")
    }

    fn printed_lines(output: &[u8]) -> Vec<String> {
        String::from_utf8(output.to_vec())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[tokio::test]
    async fn test_random_records_one_observation_per_line() {
        let sink = CapturingSink::default();
        let mut output = Vec::new();

        let count = run_random(
            b"a\nb\nc\n".as_slice(),
            &mut output,
            &sink,
            scripted(vec![10.0, 20.0, 30.0, 40.0]),
        )
        .await
        .unwrap();

        assert_eq!(count, 3);
        assert_eq!(sink.values(), vec![10.0, 20.0, 30.0]);
    }

    #[tokio::test]
    async fn test_random_prints_value_before_recording_it() {
        let sink = CapturingSink::default();
        let mut output = Vec::new();

        run_random(
            b"x\ny\n".as_slice(),
            &mut output,
            &sink,
            scripted(vec![1.5, 2.5, 3.5]),
        )
        .await
        .unwrap();

        let lines = printed_lines(&output);
        // One line per recorded value plus the value that was never recorded
        assert_eq!(
            lines,
            vec![
                "Last observation: 1.5",
                "Last observation: 2.5",
                "Last observation: 3.5",
            ]
        );
        assert_eq!(sink.values(), vec![1.5, 2.5]);
    }

    #[tokio::test]
    async fn test_random_empty_input_records_nothing() {
        let sink = CapturingSink::default();
        let mut output = Vec::new();

        let count = run_random(b"".as_slice(), &mut output, &sink, scripted(vec![5.0]))
            .await
            .unwrap();

        assert_eq!(count, 0);
        assert!(sink.values().is_empty());
        // The first value is still displayed before the read attempt
        assert_eq!(printed_lines(&output), vec!["Last observation: 5"]);
    }

    #[tokio::test]
    async fn test_random_read_error_stops_like_eof() {
        let sink = CapturingSink::default();
        let mut output = Vec::new();

        let count = run_random(
            BufReader::new(FailingReader),
            &mut output,
            &sink,
            scripted(vec![7.0]),
        )
        .await
        .unwrap();

        assert_eq!(count, 0);
        assert!(sink.values().is_empty());
    }

    #[tokio::test]
    async fn test_random_with_real_generator() {
        let sink = CapturingSink::default();
        let mut output = Vec::new();

        let count = run_random(
            b"a\nb\nc\n".as_slice(),
            &mut output,
            &sink,
            random_observations(),
        )
        .await
        .unwrap();

        let values = sink.values();
        assert_eq!(count, 3);
        assert!(values.iter().all(|v| (0.0..RANDOM_VALUE_MAX).contains(v)));
        assert!(values[0] != values[1] && values[1] != values[2]);
    }

    #[tokio::test]
    async fn test_fixed_records_both_values_on_empty_input() {
        let sink = CapturingSink::default();
        let mut output = Vec::new();

        let count = run_fixed(b"".as_slice(), &mut output, &sink).await.unwrap();

        assert_eq!(count, 2);
        assert_eq!(sink.values(), vec![100.0, 200.0]);
    }

    #[tokio::test]
    async fn test_fixed_never_records_more_than_two() {
        let sink = CapturingSink::default();
        let mut output = Vec::new();

        let count = run_fixed(b"a\nb\nc\n".as_slice(), &mut output, &sink)
            .await
            .unwrap();

        assert_eq!(count, 2);
        assert_eq!(sink.values(), vec![100.0, 200.0]);
    }

    #[tokio::test]
    async fn test_fixed_records_before_consuming_input() {
        let sink = CapturingSink::default();
        let mut output = Vec::new();

        run_fixed(b"tick\n".as_slice(), &mut output, &sink)
            .await
            .unwrap();

        let lines = printed_lines(&output);
        assert_eq!(lines[0], "Recorded observation: 100");
        assert_eq!(lines[1], "Recorded observation: 200");
    }
}
