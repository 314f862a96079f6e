use anyhow::{Context, bail};
use env_flags::env_flags;

use dnabert_registry::config;
use dnabert_registry::registry::{self, MappingName, Registry};

fn init_tracing(home: &std::path::Path) {
    env_flags! {
        /// Tracing filter, e.g. "info", "debug", or targets format.
        RUST_LOG: &str = "info";
        /// Compact single-line formatting for logs (ignored if TRACING_JSON=true)
        TRACING_COMPACT: bool = true;
        /// JSON formatting for logs
        TRACING_JSON: bool = false;
    }

    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, prelude::*};

    // User config may adjust tracing defaults where env is not set.
    let user_cfg = config::load_user_config(home).ok().flatten();
    let env_set = |k: &str| std::env::var_os(k).is_some();

    let mut rust_log = (*RUST_LOG).to_string();
    let mut tracing_json = *TRACING_JSON;
    let mut tracing_compact = *TRACING_COMPACT;
    if let Some(cfg) = user_cfg.as_ref().and_then(|c| c.logging.as_ref()) {
        if !env_set("RUST_LOG")
            && let Some(level) = cfg.level.as_ref()
        {
            rust_log = level.clone();
        }
        if !env_set("TRACING_JSON")
            && let Some(v) = cfg.json
        {
            tracing_json = v;
        }
        if !env_set("TRACING_COMPACT")
            && let Some(v) = cfg.compact
        {
            tracing_compact = v;
        }
    }

    let filter = EnvFilter::try_new(rust_log).unwrap_or_else(|_| EnvFilter::new("info"));
    // Stderr only; stdout carries resolved values for the calling pipeline.
    let base = tracing_subscriber::fmt::layer()
        .with_file(false)
        .with_line_number(false)
        .with_target(true)
        .with_ansi(true)
        .with_writer(std::io::stderr);
    let reg = tracing_subscriber::registry().with(filter);
    let init_result = if tracing_json {
        reg.with(base.json()).try_init()
    } else if tracing_compact {
        reg.with(base.compact()).try_init()
    } else {
        reg.with(base).try_init()
    };
    if let Err(e) = init_result {
        tracing::debug!("tracing already set: {:?}", e);
    }
}

fn deepdna_home() -> std::path::PathBuf {
    env_flags! {
        /// deepdna home directory (absolute). Defaults to $HOME/.deepdna
        DEEPDNA_HOME: &str = "";
    }
    if !(*DEEPDNA_HOME).is_empty() {
        std::path::PathBuf::from((*DEEPDNA_HOME).to_string())
    } else if let Ok(home) = std::env::var("HOME") {
        std::path::PathBuf::from(home).join(".deepdna")
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(".deepdna")
    }
}

/// Resolution order: REGISTRY_FILE env, user config, <home>/registry.toml if
/// present, else the built-in data.
fn load_registry(home: &std::path::Path) -> anyhow::Result<Registry> {
    env_flags! {
        /// Optional registry TOML path; if empty, <DEEPDNA_HOME>/registry.toml is probed.
        REGISTRY_FILE: &str = "";
    }
    let env_set = |k: &str| std::env::var_os(k).is_some();

    let user_cfg = config::load_user_config(home).ok().flatten();
    let file = if env_set("REGISTRY_FILE") && !(*REGISTRY_FILE).is_empty() {
        Some(std::path::PathBuf::from((*REGISTRY_FILE).to_string()))
    } else if let Some(f) = user_cfg
        .as_ref()
        .and_then(|c| c.registry.as_ref())
        .and_then(|r| r.file.as_ref())
    {
        Some(config::expand_home(f))
    } else {
        let probe = home.join("registry.toml");
        probe.exists().then_some(probe)
    };

    match file {
        Some(path) => {
            tracing::info!("loading registry from {}", path.display());
            registry::load_from_file(&path)
                .with_context(|| format!("failed to load registry from {}", path.display()))
        }
        None => {
            tracing::debug!("no registry file; using built-in data");
            Ok(registry::load_default())
        }
    }
}

fn usage() -> ! {
    eprintln!("usage: dnabert-registry <command>");
    eprintln!();
    eprintln!("commands:");
    eprintln!("  dataset <alias>     print the dataset identifier for an alias");
    eprintln!("  artifact <alias>    print the pretrain artifact locator for an alias");
    eprintln!("  aliases <mapping>   list aliases of 'datasets' or 'dnabert_pretrain_artifacts'");
    eprintln!("  check               lint artifact tags against dataset aliases");
    eprintln!("  dump                print the registry as JSON");
    std::process::exit(2);
}

fn main() -> anyhow::Result<()> {
    let home = deepdna_home();
    init_tracing(&home);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        usage();
    };

    let reg = load_registry(&home)?;
    tracing::debug!(
        "registry loaded: {} dataset(s), {} artifact(s)",
        reg.datasets.len(),
        reg.artifacts.len()
    );

    match (command.as_str(), args.get(1)) {
        ("dataset", Some(alias)) => println!("{}", reg.dataset(alias)?),
        ("artifact", Some(alias)) => println!("{}", reg.artifact(alias)?),
        ("aliases", Some(mapping)) => {
            let name: MappingName = mapping.parse()?;
            for alias in reg.aliases(name) {
                println!("{alias}");
            }
        }
        ("check", None) => {
            let issues = registry::check_tags(&reg);
            for issue in &issues {
                println!("{issue}");
            }
            if !issues.is_empty() {
                bail!("{} artifact tag issue(s)", issues.len());
            }
            tracing::info!("all artifact tags name declared dataset aliases");
        }
        ("dump", None) => println!("{}", registry::to_json_str(&reg)?),
        _ => usage(),
    }
    Ok(())
}
