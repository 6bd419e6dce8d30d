// crates/logging/tests/formatter.rs
use logging::ReportFormatter;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, registry};

#[derive(Clone, Default)]
struct VecWriter(Arc<Mutex<Vec<u8>>>);

struct VecWriterGuard(Arc<Mutex<Vec<u8>>>);

impl Write for VecWriterGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> fmt::writer::MakeWriter<'a> for VecWriter {
    type Writer = VecWriterGuard;
    fn make_writer(&'a self) -> Self::Writer {
        VecWriterGuard(self.0.clone())
    }
}

fn render(formatter: ReportFormatter, emit: impl FnOnce()) -> String {
    let writer = VecWriter::default();
    let layer = fmt::layer()
        .event_format(formatter)
        .with_ansi(false)
        .with_writer(writer.clone());
    let subscriber = registry().with(layer);
    tracing::subscriber::with_default(subscriber, emit);
    String::from_utf8(writer.0.lock().unwrap().clone()).unwrap()
}

#[test]
fn plain_message_is_written_verbatim() {
    let out = render(ReportFormatter::new(None), || {
        info!(target: "test", "wrote charts/coverage.svg");
    });
    assert_eq!(out, "wrote charts/coverage.svg\n");
}

#[test]
fn template_is_the_whole_line() {
    let out = render(ReportFormatter::new(Some("%c: %m".into())), || {
        info!(chart = "mutation", "done");
    });
    assert_eq!(out, "mutation: done\n");
}

#[test]
fn time_and_pid_only_where_requested() {
    let out = render(ReportFormatter::new(Some("%t [%p] %l %m".into())), || {
        info!("done");
    });
    let (time, rest) = out.split_once(" [").unwrap();
    assert_eq!(time.len(), "2024/01/31 12:00:00".len(), "{out}");
    assert_eq!(rest, format!("{}] INFO done\n", std::process::id()));
}
