use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};

use git_recent::commands::{CheckoutManager, Command};
use git_recent::error::Error;
use git_recent::logger;
use git_recent::scm::{self, GitVcs, Vcs};
use git_recent::store::HistoryStore;
use git_recent::table;

#[derive(Parser)]
#[command(name = "git-recent")]
#[command(about = "Jump back to recently checked out branches", long_about = None)]
#[command(version)]
#[command(group(ArgGroup::new("action").args([
    "branch", "create", "ordinal", "delete", "describe", "list"
])))]
struct Cli {
    /// Branch to switch to; "-" returns to the previous checkout
    branch: Option<String>,

    /// Create a branch with a description and switch to it
    #[arg(short = 'b', value_names = ["BRANCH", "DESC"], num_args = 2)]
    create: Option<Vec<String>>,

    /// Switch to the checkout N positions back
    #[arg(short = 'n', value_name = "N")]
    ordinal: Option<usize>,

    /// Remove the checkout N positions back from the history
    #[arg(short = 'd', value_name = "N")]
    delete: Option<usize>,

    /// Set the description of the checkout N positions back
    #[arg(short = 'c', value_names = ["N", "DESC"], num_args = 2)]
    describe: Option<Vec<String>>,

    /// Print the checkout history table
    #[arg(short = 'l', long = "list")]
    list: bool,

    /// Maximum number of history rows to print
    #[arg(long, value_name = "N", default_value_t = table::DEFAULT_LIMIT)]
    limit: usize,
}

impl Cli {
    /// Translate the parsed flags into the one selected command, if any.
    fn command(&self) -> Result<Option<Command>> {
        if let Some(name) = &self.branch {
            return Ok(Some(Command::SwitchTo(name.clone())));
        }
        if let Some(args) = &self.create {
            return Ok(Some(Command::CreateBranch {
                name: args[0].clone(),
                description: args[1].clone(),
            }));
        }
        if let Some(ordinal) = self.ordinal {
            return Ok(Some(Command::SwitchToOrdinal(ordinal)));
        }
        if let Some(ordinal) = self.delete {
            return Ok(Some(Command::DeleteOrdinal(ordinal)));
        }
        if let Some(args) = &self.describe {
            let ordinal = args[0]
                .parse()
                .with_context(|| format!("invalid history position '{}'", args[0]))?;
            return Ok(Some(Command::SetDescription {
                ordinal,
                description: args[1].clone(),
            }));
        }
        if self.list {
            return Ok(Some(Command::List));
        }
        Ok(None)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init();

    if !scm::git_available() {
        return Err(Error::VcsToolMissing.into());
    }

    let vcs = GitVcs::discover()?;
    let root = vcs.root()?;

    let Some(command) = cli.command()? else {
        return Ok(());
    };

    let store = HistoryStore::open(&root)?;
    CheckoutManager::new(store, &vcs)
        .with_limit(cli.limit)
        .dispatch(command)
}
