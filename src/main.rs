//! SocialGen terminal front-end.
//!
//! Renders the session state the way the browser UI would: copy per
//! platform as soon as the text call lands, artwork reported as each image
//! call resolves, failed platforms offered a regenerate round.

use std::path::Path;
use std::sync::Arc;

use base64::Engine;
use clap::Parser;

use socialgen::cli::Cli;
use socialgen::gateway::GeminiGateway;
use socialgen::session::ContentSession;
use socialgen::types::{GenerationRequest, Platform, SessionState};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let tone = cli.parse_tone()?;
    if cli.idea.trim().is_empty() {
        return Err("idea must not be empty".into());
    }

    let gateway = Arc::new(GeminiGateway::from_env()?);
    let session = ContentSession::new(gateway);
    let mut updates = session.subscribe();

    println!("✨ Generating {} copy for \"{}\" …", tone.label(), cli.idea.trim());
    session
        .submit(GenerationRequest::new(cli.idea.clone(), tone))
        .await?;

    // Copy is available as soon as submit returns; artwork streams in after.
    print_copy(&session.state());

    loop {
        wait_for_artwork(&mut updates).await;
        let state = session.state();
        report_artwork(&state, &cli.out_dir)?;

        let failed = failed_platforms(&state);
        if failed.is_empty() || !confirm("Retry failed artwork?") {
            break;
        }
        for platform in failed {
            session.regenerate_image(platform);
        }
    }

    Ok(())
}

/// Block until no platform has artwork in flight.
async fn wait_for_artwork(updates: &mut tokio::sync::watch::Receiver<SessionState>) {
    loop {
        let done = updates
            .borrow_and_update()
            .results
            .as_ref()
            .map(|results| !results.any_image_loading())
            .unwrap_or(true);
        if done {
            return;
        }
        if updates.changed().await.is_err() {
            return;
        }
    }
}

fn print_copy(state: &SessionState) {
    let Some(results) = state.results.as_ref() else {
        return;
    };
    for (platform, entry) in results.iter() {
        println!();
        println!(
            "━━━ {} · {} chars · {} ━━━",
            platform.display_name(),
            entry.char_count(),
            entry.aspect_ratio
        );
        println!("{}", entry.text);
    }
    println!();
}

fn report_artwork(state: &SessionState, out_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let Some(results) = state.results.as_ref() else {
        return Ok(());
    };
    std::fs::create_dir_all(out_dir)?;
    for (platform, entry) in results.iter() {
        match entry.image_url.as_deref() {
            Some(url) => {
                let path = out_dir.join(format!("{platform}.jpg"));
                write_data_url(url, &path)?;
                println!("🖼  {} → {}", platform.display_name(), path.display());
            }
            None => {
                eprintln!("❌ {} artwork failed", platform.display_name());
            }
        }
    }
    Ok(())
}

fn failed_platforms(state: &SessionState) -> Vec<Platform> {
    state
        .results
        .as_ref()
        .map(|results| {
            results
                .iter()
                .filter(|(_, entry)| !entry.image_loading && entry.image_url.is_none())
                .map(|(platform, _)| platform)
                .collect()
        })
        .unwrap_or_default()
}

/// Decode a `data:…;base64,…` image reference into a file.
fn write_data_url(url: &str, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let payload = url
        .rsplit_once("base64,")
        .map(|(_, b64)| b64)
        .ok_or("image reference is not a base64 data URL")?;
    let bytes = base64::engine::general_purpose::STANDARD.decode(payload)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

fn confirm(prompt: &str) -> bool {
    use std::io::{BufRead, IsTerminal, Write};

    if !std::io::stdin().is_terminal() {
        return false;
    }
    print!("{prompt} [y/N] ");
    let _ = std::io::stdout().flush();
    let mut line = String::new();
    if std::io::stdin().lock().read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim(), "y" | "Y" | "yes")
}
