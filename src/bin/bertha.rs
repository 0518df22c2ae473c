//! Bertha console utility
//!
//! List, store and retrieve blobs on a Bertha server.

use std::fs::File;
use std::io::{self, Read, Write};

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use bertha::{BerthaClient, BlobKey, Result};

/// Bertha CLI
#[derive(Parser, Debug)]
#[command(name = "bertha")]
#[command(about = "List, store and retrieve blobs on a Bertha server")]
#[command(version)]
struct Args {
    /// Host of the Bertha server
    #[arg(short = 'H', long, default_value = "localhost")]
    host: String,

    /// Port of the Bertha server
    #[arg(short, long, default_value_t = 819)]
    port: u16,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List blobs on the server
    List,

    /// Get a blob by hash
    Get {
        /// Hash of the blob to retrieve
        hash: String,

        /// Destination file, - for stdout
        #[arg(default_value = "-")]
        file: String,
    },

    /// Put a blob on the server
    Put {
        /// Source file, - for stdin
        #[arg(default_value = "-")]
        file: String,
    },

    /// Show the stored size of a blob
    Size {
        /// Hash of the blob to measure
        hash: String,
    },

    /// Show server counters
    Stats,

    /// Tell the server to shut down
    Quit,
}

fn main() {
    // Initialize tracing/logging; diagnostics go to stderr so blob bytes
    // on stdout stay clean
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let client = BerthaClient::new(args.host, args.port);

    if let Err(e) = run(&client, args.command) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(client: &BerthaClient, command: Commands) -> Result<()> {
    match command {
        Commands::List => {
            for key in client.list_iter()? {
                println!("{}", key?);
            }
        }

        Commands::Get { hash, file } => {
            let key: BlobKey = hash.parse()?;
            let blob = client.get(&key)?;
            copy_to_output(blob, &file)?;
        }

        Commands::Put { file } => {
            let key = if file == "-" {
                let stdin = io::stdin();
                client.put_reader(stdin.lock(), None)?
            } else {
                client.put_file(&file)?
            };
            println!("{}", key);
        }

        Commands::Size { hash } => {
            let key: BlobKey = hash.parse()?;
            println!("{}", client.size(&key)?);
        }

        Commands::Stats => {
            let stats = client.stats()?;
            println!("cycles:               {}", stats.cycles);
            println!("gets:                 {}", stats.gets);
            println!("puts:                 {}", stats.puts);
            println!("connections accepted: {}", stats.connections_accepted);
            println!("connections active:   {}", stats.connections_active);
        }

        Commands::Quit => {
            client.quit()?;
        }
    }

    Ok(())
}

/// Drain a blob stream into a file, or stdout for "-"
fn copy_to_output<R: Read>(mut blob: R, file: &str) -> Result<()> {
    if file == "-" {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        io::copy(&mut blob, &mut out)?;
        out.flush()?;
    } else {
        let mut out = File::create(file)?;
        io::copy(&mut blob, &mut out)?;
    }
    Ok(())
}
