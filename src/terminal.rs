//! Line-oriented front end: reads [`Command`]s, forwards them to the session
//! and prints what the page would show.

use std::path::Path;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::clients::{ActorClient, SessionClient};
use crate::commands::{Command, CommandError, HELP};
use crate::error::BrowserError;
use crate::model::{SessionId, SessionSnapshot};
use crate::presentation;
use crate::session_actor::SessionError;

/// Runs commands from `input` until `quit` or end of input.
///
/// Bad commands and rejected basket actions are reported on `output` and the
/// loop carries on. Losing the actor ends the loop with an error. `show`
/// reads `catalog` directly and resolves images against `asset_dir`.
pub async fn run<R, W>(
    client: &SessionClient,
    session: SessionId,
    catalog: &Catalog,
    asset_dir: &Path,
    input: R,
    mut output: W,
) -> Result<(), BrowserError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let snapshot = client.snapshot(session).await?;
    write_lines(&mut output, &presentation::product_list(&snapshot)).await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                debug!(error = %e, "Ignoring input");
                write_lines(&mut output, &[e.to_string()]).await?;
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }

        match execute(client, session, catalog, asset_dir, command).await {
            Ok(rendered) => write_lines(&mut output, &rendered).await?,
            Err(SessionError::ActorCommunicationError(msg)) => {
                return Err(SessionError::ActorCommunicationError(msg).into());
            }
            Err(e) => {
                warn!(error = %e, "Command rejected");
                write_lines(&mut output, &[e.to_string()]).await?;
            }
        }
    }

    output.flush().await?;
    Ok(())
}

async fn execute(
    client: &SessionClient,
    session: SessionId,
    catalog: &Catalog,
    asset_dir: &Path,
    command: Command,
) -> Result<Vec<String>, SessionError> {
    let rendered = match command {
        Command::Search(text) => list(&client.set_search_term(session, text).await?),
        Command::Sort(key) => list(&client.set_sort_key(session, key).await?),
        Command::Stock(flag) => list(&client.set_stock_only(session, flag).await?),
        Command::Add(id) => presentation::basket_lines(&client.add_to_basket(session, id).await?),
        Command::Remove(id) => {
            presentation::basket_lines(&client.remove_from_basket(session, id).await?)
        }
        Command::Show(id) => {
            let product = catalog.get(id).ok_or(SessionError::UnknownProduct(id))?;
            presentation::product_detail(product, asset_dir)
        }
        Command::List => list(&client.snapshot(session).await?),
        Command::Basket => presentation::basket_lines(&client.snapshot(session).await?),
        Command::Sorts => {
            let snapshot = client.snapshot(session).await?;
            presentation::sort_options(snapshot.query.sort_key)
        }
        Command::Help => HELP.lines().map(str::to_string).collect(),
        Command::Quit => Vec::new(),
    };
    Ok(rendered)
}

fn list(snapshot: &SessionSnapshot) -> Vec<String> {
    presentation::product_list(snapshot)
}

async fn write_lines<W>(output: &mut W, lines: &[String]) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    for line in lines {
        output.write_all(line.as_bytes()).await?;
        output.write_all(b"\n").await?;
    }
    Ok(())
}
