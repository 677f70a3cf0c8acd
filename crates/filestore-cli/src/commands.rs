use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use serde::Serialize;

use filestore_analysis::{RankedWords, SortOrder};
use filestore_server::{FileStoreServer, ServerConfig};

use crate::cli::*;
use crate::client::StoreClient;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    let client = StoreClient::new(cli.server.as_str());
    let format = cli.format;
    tracing::debug!(server = client.base(), "using server");
    match cli.command {
        Command::Add(args) => cmd_add(&client, args, &format).await,
        Command::List => cmd_list(&client, &format).await,
        Command::Remove(args) => cmd_remove(&client, args, &format).await,
        Command::Update(args) => cmd_update(&client, args, &format).await,
        Command::Get(args) => cmd_get(&client, args, &format).await,
        Command::WordCount => cmd_word_count(&client, &format).await,
        Command::FreqWords(args) => cmd_freq_words(&client, args, &format).await,
        Command::Health => cmd_health(&client, &format).await,
        Command::Serve(args) => cmd_serve(args).await,
    }
}

/// Read a local file for upload. The document is named by the path as given.
fn read_document(path: &str) -> anyhow::Result<(String, String)> {
    let content = std::fs::read_to_string(Path::new(path))
        .with_context(|| format!("failed to read {path}"))?;
    Ok((path.to_string(), content))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn cmd_add(client: &StoreClient, args: AddArgs, format: &OutputFormat) -> anyhow::Result<()> {
    // Every file must be readable before anything is sent.
    let documents = args
        .files
        .iter()
        .map(|path| read_document(path))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut added = Vec::with_capacity(documents.len());
    for (name, content) in &documents {
        client
            .add(name, content)
            .await
            .with_context(|| format!("failed to add {name}"))?;
        if matches!(format, OutputFormat::Text) {
            println!("  {} {}", "added:".green(), name);
        }
        added.push(name.as_str());
    }
    match format {
        OutputFormat::Json => print_json(&added),
        OutputFormat::Text => Ok(()),
    }
}

async fn cmd_list(client: &StoreClient, format: &OutputFormat) -> anyhow::Result<()> {
    let mut names = client.list().await?;
    names.sort();
    match format {
        OutputFormat::Json => print_json(&names),
        OutputFormat::Text => {
            if names.is_empty() {
                println!("{}", "No files.".dimmed());
            }
            for name in &names {
                println!("{name}");
            }
            Ok(())
        }
    }
}

async fn cmd_remove(client: &StoreClient, args: RemoveArgs, format: &OutputFormat) -> anyhow::Result<()> {
    client
        .remove(&args.name)
        .await
        .with_context(|| format!("failed to remove {}", args.name))?;
    match format {
        OutputFormat::Json => print_json(&serde_json::json!({ "removed": args.name })),
        OutputFormat::Text => {
            println!("{} Removed {}", "✓".green(), args.name.bold());
            Ok(())
        }
    }
}

async fn cmd_update(client: &StoreClient, args: UpdateArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let (name, content) = read_document(&args.file)?;
    client
        .update(&name, &content)
        .await
        .with_context(|| format!("failed to update {name}"))?;
    match format {
        OutputFormat::Json => print_json(&serde_json::json!({ "updated": name })),
        OutputFormat::Text => {
            println!("{} Updated {}", "✓".green(), name.bold());
            Ok(())
        }
    }
}

async fn cmd_get(client: &StoreClient, args: GetArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let doc = match client.get(&args.name).await {
        Err(e) if e.status() == Some(404) => anyhow::bail!("no such file: {}", args.name),
        other => other?,
    };
    match format {
        OutputFormat::Json => print_json(&doc),
        OutputFormat::Text => {
            println!("{} {}", doc.name.bold(), doc.hash.short_hex().dimmed());
            print!("{}", doc.content);
            if !doc.content.is_empty() && !doc.content.ends_with('\n') {
                println!();
            }
            Ok(())
        }
    }
}

async fn cmd_word_count(client: &StoreClient, format: &OutputFormat) -> anyhow::Result<()> {
    let total = client.word_count().await?;
    match format {
        OutputFormat::Json => print_json(&serde_json::json!({ "words": total })),
        OutputFormat::Text => {
            println!("{total}");
            Ok(())
        }
    }
}

fn render_ranked(ranked: &RankedWords) -> Vec<String> {
    let width = ranked.iter().map(|(w, _)| w.len()).max().unwrap_or(0);
    ranked
        .iter()
        .map(|(word, count)| format!("{word:<width$}  {count}"))
        .collect()
}

async fn cmd_freq_words(client: &StoreClient, args: FreqWordsArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let order = SortOrder::from_param(&args.order);
    let ranked = client.frequent_words(args.limit, order).await?;
    match format {
        OutputFormat::Json => print_json(&ranked),
        OutputFormat::Text => {
            if ranked.is_empty() {
                println!("{}", "No words.".dimmed());
            }
            for line in render_ranked(&ranked) {
                println!("{line}");
            }
            Ok(())
        }
    }
}

async fn cmd_health(client: &StoreClient, format: &OutputFormat) -> anyhow::Result<()> {
    let health = client.health().await?;
    match format {
        OutputFormat::Json => print_json(&health),
        OutputFormat::Text => {
            println!(
                "{} {} v{} ({} files)",
                "✓".green().bold(),
                health.status,
                health.version,
                health.documents
            );
            Ok(())
        }
    }
}

fn server_config(args: &ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => ServerConfig::default(),
    };
    config.apply_env()?;
    if let Some(bind) = &args.bind {
        config.bind_addr = bind
            .parse()
            .with_context(|| format!("invalid bind address: {bind}"))?;
    }
    Ok(config)
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = server_config(&args)?;
    println!("File store server on {}", config.bind_addr.to_string().bold());
    FileStoreServer::new(config).serve().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn read_document_names_by_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "hello world").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let (name, content) = read_document(&path).unwrap();
        assert_eq!(name, path);
        assert_eq!(content, "hello world");
    }

    #[test]
    fn read_document_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        let err = read_document(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn render_ranked_aligns_counts() {
        let ranked = RankedWords::new(vec![("the".into(), 3), ("a".into(), 1)]);
        assert_eq!(render_ranked(&ranked), vec!["the  3", "a    1"]);
    }

    #[test]
    fn server_config_from_file_and_bind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.toml");
        std::fs::write(&path, "max_body_bytes = 1024\n").unwrap();

        let args = ServeArgs {
            bind: Some("127.0.0.1:9999".into()),
            config: Some(path),
        };
        let config = server_config(&args).unwrap();
        assert_eq!(config.max_body_bytes, 1024);
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:9999");
    }

    #[test]
    fn server_config_rejects_bad_bind() {
        let args = ServeArgs {
            bind: Some("not-an-address".into()),
            config: None,
        };
        assert!(server_config(&args).is_err());
    }

    #[tokio::test]
    async fn add_fails_before_sending_when_a_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.txt");
        std::fs::write(&good, "x").unwrap();
        let bad = dir.path().join("bad.txt");

        // Nothing listens here; a read error must surface first.
        let client = StoreClient::new("http://127.0.0.1:9");
        let args = AddArgs {
            files: vec![
                good.to_str().unwrap().to_string(),
                bad.to_str().unwrap().to_string(),
            ],
        };
        let err = cmd_add(&client, args, &OutputFormat::Text).await.unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
