//! `avl-demo [CONFIG]`: inserts the configured keys into an AVL tree and
//! prints its shape. Without a path the built-in defaults are used;
//! `avl-demo.toml` at the repository root lists every setting.

use std::env;
use std::io::{self, Write};
use std::process;

use avl_tree::config::Config;
use avl_tree::error::ConfigResult;
use avl_tree::logging;
use avl_tree::tree::printer::render;
use avl_tree::AVLTree;
use tracing::{debug, info, Level};

const USAGE: &str = "usage: avl-demo [CONFIG.toml]  (see avl-demo.toml)";

fn main() {
    let (config, level) = match load_config(env::args().nth(1)) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            eprintln!("{}", USAGE);
            process::exit(1);
        }
    };
    logging::init(level);

    let stdout = io::stdout();
    if let Err(e) = run(&config, &mut stdout.lock()) {
        eprintln!("Failed to write tree: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<String>) -> ConfigResult<(Config, Level)> {
    let config = match path {
        Some(path) => Config::from_file(path)?,
        None => Config::new(),
    };
    let level = config.level()?;
    Ok((config, level))
}

fn run<W: Write>(config: &Config, out: &mut W) -> io::Result<()> {
    info!(keys = config.keys.len(), duplicates = ?config.duplicates, "building tree");

    let mut tree = AVLTree::with_duplicates(config.duplicates);
    for &key in &config.keys {
        tree.insert(key);
        debug!(key, height = tree.height(), size = tree.len(), "inserted");
        if config.print_steps {
            writeln!(out, "{}", render(&tree))?;
        }
    }
    if !config.print_steps {
        writeln!(out, "{}", render(&tree))?;
    }

    info!(height = tree.height(), size = tree.len(), "done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use avl_tree::error::ConfigError;
    use avl_tree::Duplicates;

    const DEMO_FINAL: &str = "\
|--7
    |--10
        |--12
        L--8
    L--3
    |   |--6
";

    fn output_of(config: &Config) -> String {
        let mut out = Vec::new();
        run(config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_prints_every_step() {
        let config = Config::new();
        let output = output_of(&config);

        let mut expected = String::new();
        let mut tree = AVLTree::new();
        for &key in &config.keys {
            tree.insert(key);
            expected.push_str(&render(&tree));
            expected.push('\n');
        }
        assert_eq!(output, expected);
        assert!(output.starts_with("|--10\n\n|--10\n    L--8\n\n"));
        assert!(output.ends_with(&format!("{}\n", DEMO_FINAL)));
        assert_eq!(output.matches("\n\n").count(), config.keys.len());
    }

    #[test]
    fn test_prints_final_tree_once() {
        let config = Config {
            print_steps: false,
            ..Config::new()
        };
        assert_eq!(output_of(&config), format!("{}\n", DEMO_FINAL));
    }

    #[test]
    fn test_ignored_duplicates_in_output() {
        let config = Config {
            keys: vec![2, 2, 1, 3, 3],
            duplicates: Duplicates::Ignore,
            print_steps: false,
            ..Config::new()
        };
        assert_eq!(output_of(&config), "|--2\n    |--3\n    L--1\n\n");
    }

    #[test]
    fn test_load_defaults_without_path() {
        let (config, level) = load_config(None).unwrap();
        assert_eq!(config, Config::new());
        assert_eq!(level, Level::INFO);
    }

    #[test]
    fn test_load_sample_config() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/avl-demo.toml");
        let (config, level) = load_config(Some(path.to_string())).unwrap();
        assert_eq!(config, Config::new());
        assert_eq!(level, Level::INFO);
    }

    #[test]
    fn test_load_failures() {
        let missing = load_config(Some("/nonexistent/avl-demo.toml".to_string()));
        assert!(matches!(missing, Err(ConfigError::Io(_))));

        let path = env::temp_dir().join(format!("avl-demo-level-{}.toml", process::id()));
        std::fs::write(&path, "log_level = \"loud\"\n").unwrap();
        let bad_level = load_config(Some(path.to_string_lossy().into_owned()));
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(bad_level, Err(ConfigError::InvalidLogLevel(_))));
    }
}
