// crates/logging/tests/info_flags.rs
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use clap::ValueEnum;
use logging::{DebugFlag, InfoFlag};
use tracing::level_filters::LevelFilter;
use tracing::subscriber::with_default;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, writer::MakeWriter},
    layer::SubscriberExt,
};

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

impl<'a> MakeWriter<'a> for VecWriter {
    type Writer = VecWriterGuard;

    fn make_writer(&'a self) -> Self::Writer {
        VecWriterGuard(self.0.clone())
    }
}

fn emit_info(flag: InfoFlag) {
    match flag {
        InfoFlag::Load => tracing::info!(target: InfoFlag::Load.target(), "load"),
        InfoFlag::Extract => tracing::info!(target: InfoFlag::Extract.target(), "extract"),
        InfoFlag::Render => tracing::info!(target: InfoFlag::Render.target(), "render"),
    }
}

fn emit_debug(flag: DebugFlag) {
    match flag {
        DebugFlag::Load => tracing::trace!(target: DebugFlag::Load.target(), "load"),
        DebugFlag::Extract => tracing::trace!(target: DebugFlag::Extract.target(), "extract"),
        DebugFlag::Layout => tracing::trace!(target: DebugFlag::Layout.target(), "layout"),
        DebugFlag::Render => tracing::trace!(target: DebugFlag::Render.target(), "render"),
    }
}

fn captured(directive: Option<String>, emit: impl FnOnce()) -> bool {
    let writer = VecWriter::default();
    let mut filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    if let Some(directive) = directive {
        filter = filter.add_directive(directive.parse().unwrap());
    }
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer.clone()));
    with_default(subscriber, emit);
    let out = writer.0.lock().unwrap();
    !out.is_empty()
}

#[test]
fn each_info_flag_enables_when_specified() {
    for &flag in InfoFlag::value_variants() {
        assert!(
            !captured(None, || emit_info(flag)),
            "{} emitted without flag",
            flag.as_str()
        );
        assert!(
            captured(Some(format!("{}=info", flag.target())), || emit_info(flag)),
            "{} did not emit output",
            flag.as_str()
        );
    }
}

#[test]
fn each_debug_flag_enables_trace() {
    for &flag in DebugFlag::value_variants() {
        assert!(!captured(None, || emit_debug(flag)));
        assert!(
            captured(Some(format!("{}=trace", flag.target())), || emit_debug(flag)),
            "{} did not emit output",
            flag.as_str()
        );
    }
}
