use clap::Parser;
use smoke_tester::{run_test, Args};

#[tokio::main]
async fn main() {
    println!("🚀 Starting App Smoke Tests");
    println!("{}", "=".repeat(50));

    let args = Args::parse();
    let success = run_test(&args.url).await;

    if success {
        println!("\n🎉 All tests passed!");
    } else {
        println!("\n💥 Tests failed!");
        std::process::exit(1);
    }
}
