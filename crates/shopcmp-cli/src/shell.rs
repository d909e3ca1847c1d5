//! Interactive comparison queue.
//!
//! Reads one command per line from stdin. Command errors are printed and the
//! loop continues; only I/O failures on stdin/stdout end the session early.

use std::io::Write as _;

use tokio::io::{AsyncBufReadExt, BufReader};

use shopcmp_client::ShopClient;
use shopcmp_core::{Language, Product, ProductId};
use shopcmp_queue::QueueManager;

use crate::render;

const HELP: &str = "\
commands:
  search <query>   search the catalog
  add <n>          add result n of the last search to the queue
  remove <id>      remove a product from the queue
  next | prev      page through the queue
  queue            show the queue
  lang <en|vi>     set the comparison language
  compare          compare the queued products
  help             show this list
  quit             leave the shell";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ShellCommand {
    Search(String),
    Add(usize),
    Remove(ProductId),
    Next,
    Prev,
    Queue,
    Lang(Language),
    Compare,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub(crate) fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(w, r)| (w, r.trim()));

        let command = match (word.to_ascii_lowercase().as_str(), rest) {
            ("search", "") => return Err("usage: search <query>".to_owned()),
            ("search", query) => ShellCommand::Search(query.to_owned()),
            ("add", n) => {
                let index = n
                    .parse::<usize>()
                    .ok()
                    .filter(|&i| i > 0)
                    .ok_or_else(|| "usage: add <n> (a result number from the last search)".to_owned())?;
                ShellCommand::Add(index)
            }
            ("remove", "") => return Err("usage: remove <id>".to_owned()),
            ("remove", id) => ShellCommand::Remove(ProductId::from(id)),
            ("next", "") => ShellCommand::Next,
            ("prev", "") => ShellCommand::Prev,
            ("queue", "") => ShellCommand::Queue,
            ("lang", code) => ShellCommand::Lang(code.parse()?),
            ("compare", "") => ShellCommand::Compare,
            ("help", _) => ShellCommand::Help,
            ("quit" | "exit", "") => ShellCommand::Quit,
            _ => return Err(format!("unknown command: {line} (type `help`)")),
        };
        Ok(Some(command))
    }
}

struct ShellState {
    language: Language,
    last_search: Vec<Product>,
}

/// Run the shell until `quit` or end of input.
///
/// # Errors
///
/// Returns an error only if reading stdin or flushing stdout fails.
pub(crate) async fn run_shell(
    client: &ShopClient,
    manager: &QueueManager,
    language: Language,
) -> anyhow::Result<()> {
    let mut state = ShellState {
        language,
        last_search: Vec::new(),
    };
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{HELP}");
    loop {
        print!("shopcmp ({})> ", state.language);
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let command = match ShellCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };
        if command == ShellCommand::Quit {
            break;
        }
        if let Err(e) = execute(client, manager, &mut state, command).await {
            println!("error: {e}");
        }
    }
    Ok(())
}

async fn execute(
    client: &ShopClient,
    manager: &QueueManager,
    state: &mut ShellState,
    command: ShellCommand,
) -> anyhow::Result<()> {
    match command {
        ShellCommand::Search(query) => {
            state.last_search = client.search(&query).await?;
            print!("{}", render::SearchResults(&state.last_search));
        }
        ShellCommand::Add(n) => {
            let product = state
                .last_search
                .get(n - 1)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("no search result numbered {n}"))?;
            manager.add(product).await?;
            print!("{}", render::QueueView(&manager.snapshot()));
        }
        ShellCommand::Remove(id) => {
            if !manager.remove(&id) {
                println!("product {id} is not in the queue");
            }
            print!("{}", render::QueueView(&manager.snapshot()));
        }
        ShellCommand::Next => {
            manager.next_page();
            print!("{}", render::QueueView(&manager.snapshot()));
        }
        ShellCommand::Prev => {
            manager.prev_page();
            print!("{}", render::QueueView(&manager.snapshot()));
        }
        ShellCommand::Queue => print!("{}", render::QueueView(&manager.snapshot())),
        ShellCommand::Lang(language) => {
            state.language = language;
            println!("comparison language set to {language}");
        }
        ShellCommand::Compare => {
            println!("Comparing in {}...\n", state.language);
            let result = manager.compare(state.language).await?;
            println!("{}", result.as_str());
        }
        ShellCommand::Help => println!("{HELP}"),
        ShellCommand::Quit => {}
    }
    Ok(())
}
