// Single-threaded command loop.
//
// Responsibilities
// - Read one JSON command per line, apply it to completion, write one JSON line back.
// - A bad line produces an error line and the loop carries on. Only I/O failures end it.

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::shell::app::App;
use crate::shell::command::Command;
use crate::shell::view::Output;

async fn write_line<W>(writer: &mut W, output: &Output<'_>) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut line = serde_json::to_vec(output).context("failed to encode output")?;
    line.push(b'\n');
    writer.write_all(&line).await.context("failed to write output")?;
    writer.flush().await.context("failed to flush output")?;
    Ok(())
}

/// Emits the initial view, then one line per non-blank input line until end of input.
pub async fn run<R, W>(app: &mut App, reader: R, mut writer: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    write_line(
        &mut writer,
        &Output::Ok {
            notification: None,
            view: app.snapshot(),
        },
    )
    .await?;

    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await.context("failed to read input")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let result = Command::parse(line).and_then(|command| {
            debug!(?command, "dispatching");
            app.dispatch(command)
        });
        match result {
            Ok(notification) => {
                write_line(
                    &mut writer,
                    &Output::Ok {
                        notification,
                        view: app.snapshot(),
                    },
                )
                .await?
            }
            Err(error) => {
                warn!(%error, "command rejected");
                write_line(
                    &mut writer,
                    &Output::Error {
                        error: error.to_string(),
                    },
                )
                .await?
            }
        }
    }
    Ok(())
}
