use env_logger::{Builder, Env, Target};

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Writer that copies everything to stderr and to a log file
struct Tee {
    file: File,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        self.file.flush()
    }
}

fn builder() -> Builder {
    let mut builder = Builder::from_env(Env::new().default_filter_or("info"));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} {:<5} {}:{} {}",
            buf.timestamp(),
            record.level(),
            record.module_path().unwrap_or("-"),
            record.line().unwrap_or(0),
            record.args()
        )
    });
    builder
}

/// Initializes the global logger, optionally mirroring output into `log_file`
pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    let mut builder = builder();

    if let Some(path) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(Target::Pipe(Box::new(Tee { file })));
    }

    builder
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}
