use pottikadai::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run_main().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
