// ABOUTME: krds-gen command line entry point
// ABOUTME: Parses arguments, sets up logging and prints the requested artifact to stdout

use anyhow::{Context, Result, anyhow, bail};
use krds::{Artifact, ArtifactRequest, Config, Generator};
use krds_logging::{LoggingGuard, info};
use krds_types::{Theme, TokenCategory};
use std::io::Write;
use std::path::PathBuf;

const USAGE: &str = "\
Usage: krds-gen [--config DIR] [--tokens FILE] [--components FILE] [-v...] <command>

Commands:
  css [--theme light|dark] [--no-utilities]   CSS custom properties and utility classes
  variables [--theme light|dark]              Custom properties visible under a theme
  tree                                        Style Dictionary JSON tree
  component <id> [--variant V] [--html|--css] Component template
  tokens <category> [--theme light|dark]      Tokens of one category
  describe <token-name>                       Human readable token description
  request <json>                              Raw JSON artifact request
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TemplatePart {
    Both,
    Html,
    Css,
}

/// What the command line asked for
#[derive(Debug)]
enum Invocation {
    Help,
    Generate(Args),
}

#[derive(Debug)]
struct Args {
    config_dir: Option<PathBuf>,
    tokens: Option<PathBuf>,
    components: Option<PathBuf>,
    verbosity: u8,
    request: ArtifactRequest,
    part: TemplatePart,
}

fn parse_theme(value: Option<String>) -> Result<Theme> {
    let value = value.context("--theme requires a value")?;
    value.parse().context("invalid --theme")
}

fn parse_args<I>(args: I) -> Result<Invocation>
where
    I: IntoIterator<Item = String>,
{
    let mut config_dir = None::<PathBuf>;
    let mut tokens = None::<PathBuf>;
    let mut components = None::<PathBuf>;
    let mut verbosity = 0u8;
    let mut command = None::<String>;
    let mut positional: Vec<String> = Vec::new();
    let mut theme = None::<Theme>;
    let mut utilities = None::<bool>;
    let mut variant = None::<String>;
    let mut part = TemplatePart::Both;

    let mut it = args.into_iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--config" => {
                config_dir = Some(PathBuf::from(it.next().context("--config requires a path")?));
            }
            "--tokens" => {
                tokens = Some(PathBuf::from(it.next().context("--tokens requires a path")?));
            }
            "--components" => {
                components = Some(PathBuf::from(
                    it.next().context("--components requires a path")?,
                ));
            }
            "--theme" => theme = Some(parse_theme(it.next())?),
            "--no-utilities" => utilities = Some(false),
            "--variant" => {
                variant = Some(it.next().context("--variant requires a value")?);
            }
            "--html" => part = TemplatePart::Html,
            "--css" => part = TemplatePart::Css,
            "-h" | "--help" => return Ok(Invocation::Help),
            flag if flag.starts_with("-v") && flag[1..].chars().all(|c| c == 'v') => {
                verbosity = verbosity.saturating_add((flag.len() - 1) as u8);
            }
            flag if flag.starts_with('-') => bail!("unknown option '{flag}'\n\n{USAGE}"),
            _ => {
                if command.is_none() {
                    command = Some(arg);
                } else {
                    positional.push(arg);
                }
            }
        }
    }

    let command = command.ok_or_else(|| anyhow!("no command given\n\n{USAGE}"))?;
    let mut positional = positional.into_iter();
    let mut operand = |what: &str| {
        positional
            .next()
            .with_context(|| format!("{command} requires {what}"))
    };

    let request = match command.as_str() {
        "css" => ArtifactRequest::Stylesheet { theme, utilities },
        "variables" => ArtifactRequest::Variables { theme },
        "tree" => ArtifactRequest::StyleDictionary,
        "component" => ArtifactRequest::Component {
            id: operand("a component id")?,
            variant,
        },
        "tokens" => ArtifactRequest::Tokens {
            category: operand("a token category")?
                .parse::<TokenCategory>()
                .context("invalid token category")?,
            theme,
        },
        "describe" => ArtifactRequest::DescribeToken {
            name: operand("a token name")?,
        },
        "request" => serde_json::from_str(&operand("a JSON request")?)
            .context("invalid JSON request")?,
        other => bail!("unknown command '{other}'\n\n{USAGE}"),
    };

    Ok(Invocation::Generate(Args {
        config_dir,
        tokens,
        components,
        verbosity,
        request,
        part,
    }))
}

fn setup_logging(verbosity: u8, config: &Config) -> Result<LoggingGuard> {
    let mut logging = config.logging.clone();
    logging.raise_for_verbosity(verbosity);
    logging.apply_env_overrides()?;
    krds_logging::init_logging_with_config(logging)
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config_dir {
        Some(dir) => Config::load_from_dir(dir)?,
        None => Config::load()?,
    };
    config.apply_env_overrides()?;

    // Command line beats environment beats file
    if let Some(path) = &args.tokens {
        config.catalog.tokens = Some(path.clone());
    }
    if let Some(path) = &args.components {
        config.catalog.components = Some(path.clone());
    }
    Ok(config)
}

fn render(artifact: &Artifact, part: TemplatePart) -> Result<String> {
    Ok(match (artifact, part) {
        (Artifact::Template(template), TemplatePart::Html) => template.html.clone(),
        (Artifact::Template(template), TemplatePart::Css) => template.css.clone(),
        _ => artifact.to_text()?,
    })
}

fn main() -> Result<()> {
    let args = match parse_args(std::env::args().skip(1))? {
        Invocation::Help => {
            print!("{USAGE}");
            return Ok(());
        }
        Invocation::Generate(args) => args,
    };
    let config = load_config(&args)?;
    let _guard = setup_logging(args.verbosity, &config).context("failed to initialize logging")?;

    let generator = Generator::new(
        config.load_tokens()?,
        config.load_components()?,
        config.generator,
    );

    let kind = args.request.kind();
    let artifact = generator
        .generate(args.request)
        .with_context(|| format!("failed to generate {kind}"))?;
    info!(kind, "Artifact generated");

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(render(&artifact, args.part)?.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
