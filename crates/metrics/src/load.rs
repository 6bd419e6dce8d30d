// crates/metrics/src/load.rs

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{DocumentSource, MetricsError, Result};
use crate::model::MetricsDocument;
use logging::{DebugFlag, InfoFlag};

/// Read and parse the metrics document at `path`.
///
/// # Errors
///
/// Returns [`MetricsError::DocumentRead`] if the file cannot be opened or is
/// not a well-formed metrics document.
pub fn load(path: &Path) -> Result<MetricsDocument> {
    let origin = path.display().to_string();
    debug!(target: DebugFlag::Load.target(), path = %origin, "opening metrics document");
    let file = File::open(path).map_err(|e| MetricsError::DocumentRead {
        origin: origin.clone(),
        source: DocumentSource::Io(e),
    })?;
    let doc = MetricsDocument::from_reader(BufReader::new(file), &origin)?;
    info!(
        target: InfoFlag::Load.target(),
        path = %origin,
        features = doc.len(),
        "loaded metrics document"
    );
    Ok(doc)
}
