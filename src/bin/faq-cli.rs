use std::path::PathBuf;

use clap::{Parser, Subcommand};
use reqwest::multipart::{Form, Part};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "faq-cli")]
#[command(about = "Command-line client for the FAQ service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:5050")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all FAQs
    List,
    /// Show one FAQ
    Get { id: u64 },
    /// Create a FAQ
    Create {
        #[arg(short, long)]
        question: String,
        #[arg(short, long)]
        answer: Option<String>,
        /// Image file to attach
        #[arg(short, long)]
        image: Option<PathBuf>,
    },
    /// Update fields of a FAQ
    Update {
        id: u64,
        #[arg(short, long)]
        question: Option<String>,
        #[arg(short, long)]
        answer: Option<String>,
        #[arg(short, long)]
        image: Option<PathBuf>,
    },
    /// Delete a FAQ
    Delete { id: u64 },
    /// Translate text into a target language code
    Translate { text: String, target: String },
}

async fn build_form(
    question: Option<String>,
    answer: Option<String>,
    image: Option<PathBuf>,
) -> Result<Form, Box<dyn std::error::Error>> {
    let mut form = Form::new();
    if let Some(q) = question {
        form = form.text("question", q);
    }
    if let Some(a) = answer {
        form = form.text("answer", a);
    }
    if let Some(path) = image {
        let bytes = tokio::fs::read(&path).await?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        form = form.part("image", Part::bytes(bytes).file_name(filename));
    }
    Ok(form)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::List => client.get(format!("{base}/faqs")).send().await?,
        Commands::Get { id } => client.get(format!("{base}/faqs/{id}")).send().await?,
        Commands::Create {
            question,
            answer,
            image,
        } => {
            let form = build_form(Some(question), answer, image).await?;
            client.post(format!("{base}/faqs")).multipart(form).send().await?
        }
        Commands::Update {
            id,
            question,
            answer,
            image,
        } => {
            let form = build_form(question, answer, image).await?;
            client.put(format!("{base}/faqs/{id}")).multipart(form).send().await?
        }
        Commands::Delete { id } => client.delete(format!("{base}/faqs/{id}")).send().await?,
        Commands::Translate { text, target } => {
            client
                .post(format!("{base}/translate"))
                .json(&json!({ "text": text, "targetLanguage": target }))
                .send()
                .await?
        }
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;
    if !status.is_success() {
        eprintln!("Error: {}", status);
    }
    // Proxies and timeouts can answer with plain text.
    match serde_json::from_str::<Value>(&text) {
        Ok(body) => println!("{}", serde_json::to_string_pretty(&body)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}
