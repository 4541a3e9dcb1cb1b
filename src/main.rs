use clap::{Parser, Subcommand};
use postprep::{categories, output, posts, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "postprep")]
#[command(about = "Jekyll content preprocessor for a tree of markdown notes")]
#[command(long_about = "\
Jekyll content preprocessor for a tree of markdown notes

Your filesystem is the data source. Each directory level under the source
root is a category; filenames become titles and permalinks.

Content structure:

  posts/
  ├── scratch.md             # Root-level note → /scratch/, no categories
  ├── tech/
  │   ├── tech.md            # Index note (stem = dir name) → /tech/
  │   ├── rust-notes.md      # → /tech/rust-notes/, categories: tech
  │   └── databases/
  │       └── postgres.md    # → /tech/databases/postgres/
  └── travel/
      └── japan.md

Outputs:

  _posts/<date>-<slug>.md    # Front-matter (layout, title, date,
                             # categories, permalink) + content verbatim
  _data/categories.yml       # Ordered {name, url, children} records")]
#[command(version)]
struct Cli {
    /// Source directory of markdown notes
    #[arg(long, default_value = "posts", global = true)]
    source: PathBuf,

    /// Output directory for generated posts
    #[arg(long, default_value = "_posts", global = true)]
    output: PathBuf,

    /// Path of the generated category index
    #[arg(long, default_value = "_data/categories.yml", global = true)]
    categories_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the scanned manifest as JSON
    Scan,
    /// Write renamed, front-matter-prefixed posts
    Posts,
    /// Write the category index YAML
    Categories,
    /// Run the full pipeline: scan once, write posts and categories
    Build,
    /// Scan and summarize the source tree without writing
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let today = chrono::Local::now().date_naive();

    match cli.command {
        Command::Scan => {
            let manifest = scan::scan(&cli.source)?;
            println!("{}", serde_json::to_string_pretty(&manifest)?);
        }
        Command::Posts => {
            let manifest = scan::scan(&cli.source)?;
            let written = posts::write_posts(&manifest, &cli.output, today)?;
            output::print_posts_output(&written);
        }
        Command::Categories => {
            let manifest = scan::scan(&cli.source)?;
            let records = categories::write_index(&manifest, &cli.categories_file)?;
            output::print_categories_output(&records, &cli.categories_file);
        }
        Command::Build => {
            println!("==> Scanning {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            output::print_check_output(&manifest, &cli.source);

            println!("==> Writing posts to {}", cli.output.display());
            let written = posts::write_posts(&manifest, &cli.output, today)?;
            output::print_posts_output(&written);

            println!("==> Writing category index");
            let records = categories::write_index(&manifest, &cli.categories_file)?;
            output::print_categories_output(&records, &cli.categories_file);

            println!("==> Build complete");
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            output::print_check_output(&manifest, &cli.source);
        }
    }

    Ok(())
}
