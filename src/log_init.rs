use log::{LevelFilter, Metadata, Record};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

struct FileLogger {
    file_path: PathBuf,
    level: LevelFilter,
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)
            {
                let _ = writeln!(
                    file,
                    "[{}] {}: {}",
                    record.level(),
                    record.target(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {}
}

/// Send `log` records up to `level` to the file at `path`, appending.
///
/// The file is created up front so a bad path is reported here rather than
/// silently dropping records later. Only one logger can be installed per
/// process; later calls return [`Error::LoggerAlreadySet`].
pub fn init_logger(path: impl AsRef<Path>, level: LevelFilter) -> Result<()> {
    let file_path = path.as_ref().to_path_buf();
    OpenOptions::new().create(true).append(true).open(&file_path)?;

    let logger = FileLogger { file_path, level };
    log::set_boxed_logger(Box::new(logger)).map_err(|_| Error::LoggerAlreadySet)?;
    log::set_max_level(level);
    Ok(())
}
