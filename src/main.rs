use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vendor_payloads::ai::openai::{decode_chat_completion, ChatCompletionResponseBody};
use vendor_payloads::ai::stability::{OutputFormat, UltraRequestBody};
use vendor_payloads::ai::MultipartFormEncodable;

#[derive(Debug, Parser)]
#[command(name = "vendor-payloads")]
#[command(about = "Inspect AI provider payloads offline")]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Decode a saved OpenAI chat completion body and print a summary.
    Chat {
        /// Path to the response body, or `-` for stdin.
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
    /// Print the form fields of a Stable Image Ultra request.
    Ultra {
        #[arg(long)]
        prompt: String,

        #[arg(long)]
        aspect_ratio: Option<String>,

        #[arg(long)]
        negative_prompt: Option<String>,

        #[arg(long, value_parser = parse_output_format)]
        output_format: Option<OutputFormat>,

        #[arg(long)]
        seed: Option<u32>,
    },
}

fn parse_output_format(input: &str) -> std::result::Result<OutputFormat, String> {
    input.parse().map_err(|e: vendor_payloads::Error| e.to_string())
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }

    std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn chat_summary(response: &ChatCompletionResponseBody) -> Value {
    let choices: Vec<Value> = response
        .choices
        .iter()
        .map(|choice| {
            let tool_calls: Vec<Value> = choice
                .message
                .tool_calls
                .iter()
                .flatten()
                .map(|call| {
                    json!({
                        "type": call.tool_type,
                        "name": call.function.name,
                        "arguments": call.function.arguments,
                    })
                })
                .collect();

            json!({
                "finish_reason": choice.finish_reason,
                "role": choice.message.role,
                "content": choice.message.content,
                "tool_calls": tool_calls,
            })
        })
        .collect();

    json!({
        "model": response.model,
        "created": response.created_at().map(|t| t.to_rfc3339()),
        "choices": choices,
    })
}

fn ultra_lines(request: &UltraRequestBody) -> Vec<String> {
    request
        .form_fields()
        .into_iter()
        .map(|field| format!("{}={}", field.name, field.value))
        .collect()
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Chat { input } => {
            let bytes = read_input(&input)?;
            info!("Decoding {} bytes", bytes.len());
            let response = decode_chat_completion(&bytes)?;
            println!("{}", serde_json::to_string_pretty(&chat_summary(&response))?);
        }
        Command::Ultra {
            prompt,
            aspect_ratio,
            negative_prompt,
            output_format,
            seed,
        } => {
            let mut request = UltraRequestBody::new(prompt);
            if let Some(ratio) = aspect_ratio {
                request = request.with_aspect_ratio(ratio);
            }
            if let Some(negative) = negative_prompt {
                request = request.with_negative_prompt(negative);
            }
            if let Some(format) = output_format {
                request = request.with_output_format(format);
            }
            if let Some(seed) = seed {
                request = request.with_seed(seed);
            }

            for line in ultra_lines(&request) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vendor_payloads=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CliArgs::parse();

    if let Err(e) = run(args.command) {
        error!("Inspection failed: {:#}", e);
        std::process::exit(1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_output_format_valid() {
        assert_eq!(parse_output_format("webp").unwrap(), OutputFormat::Webp);
    }

    #[test]
    fn test_parse_output_format_invalid() {
        let err = parse_output_format("bmp").unwrap_err();
        assert!(err.contains("jpeg, png, or webp"));
    }

    #[test]
    fn test_read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"a\":1}").unwrap();

        let bytes = read_input(file.path()).unwrap();
        assert_eq!(bytes, b"{\"a\":1}");
    }

    #[test]
    fn test_read_input_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(&dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_chat_summary_reports_absent_arguments_as_null() {
        let body = json!({
            "created": 1723939200,
            "model": "gpt-4o",
            "choices": [{
                "finish_reason": "tool_calls",
                "message": {
                    "role": "assistant",
                    "tool_calls": [{
                        "type": "function",
                        "function": { "name": "lookup", "arguments": "oops" }
                    }]
                }
            }]
        });
        let response = decode_chat_completion(body.to_string().as_bytes()).unwrap();
        let summary = chat_summary(&response);

        assert_eq!(summary["model"], "gpt-4o");
        assert_eq!(summary["created"], "2024-08-18T00:00:00+00:00");
        assert_eq!(summary["choices"][0]["tool_calls"][0]["name"], "lookup");
        assert_eq!(summary["choices"][0]["tool_calls"][0]["arguments"], Value::Null);
        assert_eq!(summary["choices"][0]["content"], Value::Null);
    }

    #[test]
    fn test_ultra_lines() {
        let request = UltraRequestBody::new("a cat")
            .with_output_format(OutputFormat::Png)
            .with_seed(0);
        assert_eq!(
            ultra_lines(&request),
            vec!["prompt=a cat", "output_format=png", "seed=0"]
        );
    }
}
