//! Out-of-process image tools: Graphviz and the image viewer.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use pkgdag_core::{Error, Result};
use pkgdag_render::{ImageViewer, Rasterizer};

/// Image format requested from Graphviz; also the temp file extension.
pub const IMAGE_FORMAT: &str = "svg";

/// Pipes a DOT description through Graphviz.
#[derive(Debug, Clone)]
pub struct GraphvizRasterizer {
    program: String,
}

impl Default for GraphvizRasterizer {
    fn default() -> Self {
        Self::new("dot")
    }
}

impl GraphvizRasterizer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Rasterizer for GraphvizRasterizer {
    fn rasterize(&self, description: &str) -> Result<Vec<u8>> {
        let mut child = Command::new(&self.program)
            .arg(format!("-T{IMAGE_FORMAT}"))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|err| {
                Error::rasterize_failed(format!("failed to run {}", self.program))
                    .with_operation("graphviz::rasterize")
                    .set_source(err)
            })?;

        // Graphviz reads the whole graph before producing output, so writing
        // all of stdin first cannot deadlock on a full stdout pipe.
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(description.as_bytes()).map_err(|err| {
                Error::rasterize_failed("failed to write graph description")
                    .with_operation("graphviz::rasterize")
                    .set_source(err)
            })?;
        }

        let output = child.wait_with_output().map_err(|err| {
            Error::rasterize_failed(format!("failed to wait for {}", self.program))
                .with_operation("graphviz::rasterize")
                .set_source(err)
        })?;

        if !output.status.success() {
            return Err(
                Error::rasterize_failed(format!("{} exited with {}", self.program, output.status))
                    .with_operation("graphviz::rasterize"),
            );
        }
        Ok(output.stdout)
    }
}

/// Opens an image with an external command.
///
/// The command string is split with shell-word rules, so `"firefox --new-window"`
/// works. The image is written to a temporary file that is removed once the
/// viewer returns, whether it succeeded or not.
#[derive(Debug, Clone)]
pub struct CommandViewer {
    command: String,
}

impl CommandViewer {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Split the command line into program and arguments.
    pub fn argv(&self) -> Result<Vec<String>> {
        let argv = shell_words::split(&self.command).map_err(|err| {
            Error::invalid_argument(format!("cannot parse viewer command '{}'", self.command))
                .with_operation("viewer::argv")
                .set_source(err)
        })?;
        if argv.is_empty() {
            return Err(Error::invalid_argument("viewer command is empty").with_operation("viewer::argv"));
        }
        Ok(argv)
    }
}

impl ImageViewer for CommandViewer {
    fn display(&self, image: &[u8]) -> Result<()> {
        let argv = self.argv()?;

        let mut file = tempfile::Builder::new()
            .prefix("pkgdag-")
            .suffix(&format!(".{IMAGE_FORMAT}"))
            .tempfile()?;
        file.write_all(image)?;
        file.flush()?;
        debug!(path = %file.path().display(), bytes = image.len(), "wrote image");

        let status = Command::new(&argv[0])
            .args(&argv[1..])
            .arg(file.path())
            .status()
            .map_err(|err| {
                Error::viewer_failed(format!("failed to run {}", argv[0]))
                    .with_operation("viewer::display")
                    .set_source(err)
            })?;

        if !status.success() {
            return Err(Error::viewer_failed(format!("{} exited with {}", argv[0], status))
                .with_operation("viewer::display"));
        }
        info!(viewer = %argv[0], "image shown");
        Ok(())
    }
}
