use crate::cli::Command;

pub mod add;
pub mod list;

pub async fn dispatch(command: Command, verbose: bool) -> Result<(), String> {
    match command {
        Command::Add(args) => add::run(args, verbose).await,
        Command::List(args) => list::run(args, verbose).await,
    }
}
