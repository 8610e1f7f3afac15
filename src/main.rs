use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use color_harmony::{HarmonyRule, Palette, Rgb};
use devbench::config::AppConfig;
use devbench::export;
use devbench::services::{QrClient, QrRequest};
use devbench::tools;
use devbench::tools::code::Language;
use devbench::tools::{Gradient, GradientKind, Preset};

#[derive(Parser)]
#[command(name = "devbench")]
#[command(about = "Developer utility workbench - palettes, gradients, codecs and QR codes")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive harmony palettes from a base color
    Palette {
        /// Base color as #RRGGBB (configured default when omitted)
        base: Option<String>,

        /// Use a uniform-random base color
        #[arg(long)]
        random: bool,

        /// Single rule: monochromatic, analogous, complementary or triadic
        #[arg(short, long)]
        rule: Option<String>,

        /// Output format: "text", "css" or "json"
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Write output to this file (or directory) instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate a two-color CSS gradient
    Gradient {
        /// Gradient kind: "linear" or "radial"
        #[arg(short, long, default_value = "linear")]
        kind: String,

        /// Start color as #RRGGBB
        #[arg(long)]
        from: Option<String>,

        /// End color as #RRGGBB
        #[arg(long)]
        to: Option<String>,

        /// Linear direction: 0deg to 315deg in 45 degree steps
        #[arg(short, long, default_value = "45deg")]
        direction: String,

        /// Use a named preset (e.g. "Sunset", "Fire")
        #[arg(short, long)]
        preset: Option<String>,

        /// Randomize colors and direction
        #[arg(long)]
        random: bool,

        /// Write a standalone stylesheet to this file (or directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Base64 encode or decode text
    Base64 {
        /// "encode" or "decode"
        mode: String,

        /// Input text (read from stdin when omitted)
        input: Option<String>,

        /// Write output to this file (or directory) instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Format, minify or validate JSON
    Json {
        /// "format", "minify" or "validate"
        action: String,

        /// Input text (read from stdin when omitted)
        input: Option<String>,

        /// Write output to this file (or directory) instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Reformat code with the naive line-breaking transform
    Fmt {
        /// Input code (read from stdin when omitted)
        input: Option<String>,

        /// Language: javascript, typescript, html, css, json or python
        #[arg(short, long, default_value = "javascript")]
        language: String,

        /// Write output to this file (or directory) instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Fetch a QR code image from the remote service
    Qr {
        /// Text, URL or other payload to encode
        data: String,

        /// Image size in pixels, 100-500
        #[arg(short, long)]
        size: Option<u32>,

        /// Foreground color as #RRGGBB
        #[arg(long)]
        color: Option<String>,

        /// Background color as #RRGGBB
        #[arg(long)]
        bgcolor: Option<String>,

        /// Output PNG path (defaults to qrcode.png)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the image URL without fetching it
        #[arg(long)]
        url_only: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI use
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "devbench=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = AppConfig::load();

    match cli.command {
        Some(Commands::Palette {
            base,
            random,
            rule,
            format,
            output,
        }) => run_palette(&config, base, random, rule, &format, output),
        Some(Commands::Gradient {
            kind,
            from,
            to,
            direction,
            preset,
            random,
            output,
        }) => run_gradient(&kind, from, to, &direction, preset, random, output),
        Some(Commands::Base64 {
            mode,
            input,
            output,
        }) => run_base64(&mode, input, output),
        Some(Commands::Json {
            action,
            input,
            output,
        }) => run_json(&action, input, output),
        Some(Commands::Fmt {
            input,
            language,
            output,
        }) => run_fmt(input, &language, output),
        Some(Commands::Qr {
            data,
            size,
            color,
            bgcolor,
            output,
            url_only,
        }) => run_qr(&config, data, size, color, bgcolor, output, url_only).await,
        None => {
            run_status_command(&config);
            Ok(())
        }
    }
}

/// Read the tool input from an argument or, when omitted, from stdin.
fn read_input(arg: Option<String>) -> anyhow::Result<String> {
    match arg {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Print to stdout, or save to a file when an output path was given.
fn emit(output: Option<PathBuf>, default_name: &str, text: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            let written = export::save(Some(path), default_name, text.as_bytes())?;
            println!("Saved {} ({} bytes)", written.display(), text.len());
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn run_palette(
    config: &AppConfig,
    base: Option<String>,
    random: bool,
    rule: Option<String>,
    format: &str,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let base: Rgb = if random {
        tools::random_rgb()
    } else {
        base.as_deref()
            .unwrap_or(&config.palette.base_color)
            .parse()?
    };

    let palettes: Vec<Palette> = match rule {
        Some(name) => vec![Palette::derive(name.parse::<HarmonyRule>()?, base)],
        None => Palette::derive_all(base).to_vec(),
    };

    let default_name = match palettes.as_slice() {
        [single] => export::names::palette_css(single.rule()),
        _ => "palette.css".to_string(),
    };

    let text = match format {
        "text" => {
            let mut lines = vec![format!("base: {base}"), String::new()];
            for palette in &palettes {
                let swatches: Vec<String> =
                    palette.colors().iter().map(Rgb::to_string).collect();
                lines.push(format!(
                    "{:<14} {}",
                    palette.rule().name(),
                    swatches.join(" ")
                ));
            }
            lines.join("\n")
        }
        "css" => {
            let blocks: Vec<String> = palettes.iter().map(Palette::to_css).collect();
            blocks.join("\n\n")
        }
        "json" => {
            let mut object = serde_json::Map::new();
            object.insert("base".into(), serde_json::json!(base.to_string()));
            for palette in &palettes {
                let colors: Vec<String> =
                    palette.colors().iter().map(Rgb::to_string).collect();
                object.insert(palette.rule().name().into(), serde_json::json!(colors));
            }
            serde_json::to_string_pretty(&serde_json::Value::Object(object))?
        }
        other => anyhow::bail!("Unknown format '{other}' (expected text, css or json)"),
    };

    emit(output, &default_name, &text)
}

fn run_gradient(
    kind: &str,
    from: Option<String>,
    to: Option<String>,
    direction: &str,
    preset: Option<String>,
    random: bool,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let mut gradient = match preset {
        Some(name) => Preset::find(&name)?,
        None => {
            let defaults = Gradient::default();
            Gradient {
                kind: kind.parse::<GradientKind>()?,
                color1: match from {
                    Some(hex) => hex.parse()?,
                    None => defaults.color1,
                },
                color2: match to {
                    Some(hex) => hex.parse()?,
                    None => defaults.color2,
                },
                direction: direction.parse()?,
            }
        }
    };

    if random {
        gradient = gradient.randomize();
    }

    match output {
        Some(path) => {
            let sheet = gradient.stylesheet();
            let written =
                export::save(Some(path), export::names::GRADIENT_CSS, sheet.as_bytes())?;
            println!("Saved {} ({} bytes)", written.display(), sheet.len());
        }
        None => println!("{}", gradient.css()),
    }
    Ok(())
}

fn run_base64(
    mode: &str,
    input: Option<String>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let input = read_input(input)?;
    let (result, default_name) = match mode {
        "encode" => (tools::base64::encode(&input), export::names::ENCODED_TEXT),
        "decode" => (tools::base64::decode(&input)?, export::names::DECODED_TEXT),
        other => anyhow::bail!("Unknown mode '{other}' (expected encode or decode)"),
    };
    emit(output, default_name, &result)
}

fn run_json(action: &str, input: Option<String>, output: Option<PathBuf>) -> anyhow::Result<()> {
    let input = read_input(input)?;
    let result = match action {
        "format" => tools::json::format(&input)?,
        "minify" => tools::json::minify(&input)?,
        "validate" => {
            // Validation only prints a verdict; an output path would be
            // accepted and then never written, so reject it up front.
            if output.is_some() {
                anyhow::bail!("--output is not supported for 'validate'");
            }
            if tools::json::validate(&input) {
                println!("Valid JSON");
                return Ok(());
            }
            anyhow::bail!("Invalid JSON format");
        }
        other => anyhow::bail!("Unknown action '{other}' (expected format, minify or validate)"),
    };
    emit(output, export::names::FORMATTED_JSON, &result)
}

fn run_fmt(input: Option<String>, language: &str, output: Option<PathBuf>) -> anyhow::Result<()> {
    let language: Language = language.parse()?;
    let input = read_input(input)?;
    let formatted = tools::code::format(&input, language);
    emit(output, &export::names::formatted_code(language), &formatted)
}

async fn run_qr(
    config: &AppConfig,
    data: String,
    size: Option<u32>,
    color: Option<String>,
    bgcolor: Option<String>,
    output: Option<PathBuf>,
    url_only: bool,
) -> anyhow::Result<()> {
    let request = QrRequest {
        data,
        size: size.unwrap_or(config.qr.size),
        color: color.as_deref().unwrap_or(&config.qr.color).parse()?,
        bgcolor: bgcolor.as_deref().unwrap_or(&config.qr.bgcolor).parse()?,
    };

    let client = QrClient::new(&config.qr)?;

    if url_only {
        println!("{}", client.image_url(&request)?);
        return Ok(());
    }

    let png = client.fetch_png(&request).await?;
    let written = export::save(output, export::names::QR_PNG, &png)?;
    println!("Saved {} ({} bytes)", written.display(), png.len());
    Ok(())
}


/// Display status and configuration information
fn run_status_command(config: &AppConfig) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("Devbench v{VERSION} - developer utility workbench\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    println!("\nConfiguration:");
    println!("  QR endpoint:  {}", config.qr.endpoint);
    println!("  QR size:      {}px", config.qr.size);
    println!("  Palette base: {}", config.palette.base_color);

    println!("\nCommands:");
    println!("  devbench palette   Derive harmony palettes from a base color");
    println!("  devbench gradient  Generate a two-color CSS gradient");
    println!("  devbench base64    Base64 encode or decode text");
    println!("  devbench json      Format, minify or validate JSON");
    println!("  devbench fmt       Reformat code (naive line breaking)");
    println!("  devbench qr        Fetch a QR code image");
    println!("\nRun 'devbench --help' for more details.");
}
