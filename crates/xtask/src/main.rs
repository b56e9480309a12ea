use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::sync::OnceLock;

use anyhow::Context;
use serde::Deserialize;

const USAGE: &str = "Usage: cargo xtask <command>\n\nCommands:\n  arch-check\n  check-data <quests.json> <route.json> <quest_facts.json>";

/// Crates the pure domain crate must never depend on.
const DOMAIN_FORBIDDEN_DEPS: [&str; 6] = [
    "ironpath-engine",
    "tracing",
    "tracing-subscriber",
    "regex-lite",
    "tempfile",
    "tokio",
];

const STEP_TYPES: [&str; 7] = ["QUEST", "TRAIN", "MINIQUEST", "DIARY", "NOTE", "UNLOCK", "LAMP"];

static QUEST_ID_REGEX: OnceLock<regex_lite::Regex> = OnceLock::new();

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some("check-data") => {
            let paths: Vec<String> = args.collect();
            let [registry, route, facts] = paths.as_slice() else {
                anyhow::bail!("{USAGE}");
            };
            check_data(Path::new(registry), Path::new(route), Path::new(facts))
        }
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}\n\n{USAGE}"),
        None => anyhow::bail!("{USAGE}"),
    }
}

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    /// `None` for normal dependencies, `dev` or `build` otherwise
    kind: Option<String>,
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;
    let domain = metadata
        .packages
        .iter()
        .find(|package| package.name == "ironpath-domain")
        .context("ironpath-domain not found in workspace")?;

    let violations: Vec<&str> = domain
        .dependencies
        .iter()
        .filter(|dep| dep.kind.is_none())
        .map(|dep| dep.name.as_str())
        .filter(|name| DOMAIN_FORBIDDEN_DEPS.contains(name))
        .collect();

    if !violations.is_empty() {
        anyhow::bail!(
            "ironpath-domain must stay pure, found forbidden dependencies: {}",
            violations.join(", ")
        );
    }

    println!("arch-check: ok ({} workspace packages)", metadata.packages.len());
    Ok(())
}

#[derive(Debug, Deserialize)]
struct RegistryRow {
    id: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RouteRow {
    #[serde(rename = "type")]
    step_type: Option<String>,
    quest: Option<String>,
    skill: Option<String>,
    to_level: Option<i64>,
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}

fn normalize(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

fn check_data(registry_path: &Path, route_path: &Path, facts_path: &Path) -> anyhow::Result<()> {
    let id_regex = QUEST_ID_REGEX.get_or_init(|| {
        regex_lite::Regex::new(r"^[A-Z0-9_]+$").expect("QUEST_ID_REGEX pattern is invalid")
    });

    let registry: Vec<RegistryRow> = read_json(registry_path)?;
    let route: Vec<serde_json::Value> = read_json(route_path)?;
    let facts: BTreeMap<String, serde_json::Value> = read_json(facts_path)?;

    let mut problems = Vec::new();
    let mut keys = HashSet::new();
    for (index, row) in registry.iter().enumerate() {
        match row.id.as_deref().map(str::trim) {
            Some(id) if id_regex.is_match(id) => {
                keys.insert(id.to_string());
                keys.insert(normalize(id));
            }
            other => problems.push(format!("quests[{index}]: invalid id {other:?}")),
        }
        if let Some(name) = row.name.as_deref() {
            keys.insert(normalize(name));
        }
    }

    let resolves = |reference: &str| {
        keys.contains(reference.trim()) || keys.contains(&normalize(reference))
    };

    let mut seen = HashSet::new();
    for (index, value) in route.iter().enumerate() {
        let row = match RouteRow::deserialize(value) {
            Ok(row) => row,
            Err(e) => {
                problems.push(format!("route[{index}]: malformed row ({e})"));
                continue;
            }
        };
        let step_type = row
            .step_type
            .as_deref()
            .map(|t| t.trim().to_ascii_uppercase())
            .unwrap_or_default();
        if !STEP_TYPES.contains(&step_type.as_str()) {
            problems.push(format!("route[{index}]: unknown type {:?}", row.step_type));
            continue;
        }
        match step_type.as_str() {
            "QUEST" | "MINIQUEST" => match row.quest.as_deref() {
                Some(quest) if resolves(quest) => {
                    if !seen.insert(normalize(quest)) {
                        problems.push(format!("route[{index}]: duplicate quest {quest}"));
                    }
                }
                other => problems.push(format!("route[{index}]: unresolved quest {other:?}")),
            },
            "TRAIN" => {
                if row.skill.is_none() || row.to_level.unwrap_or(0) < 1 {
                    problems.push(format!("route[{index}]: train row needs skill and toLevel >= 1"));
                }
            }
            _ => {}
        }
    }

    for key in facts.keys() {
        if !resolves(key) {
            problems.push(format!("quest_facts: unresolved key {key:?}"));
        }
    }

    println!(
        "check-data: {} quests, {} route rows, {} fact entries",
        registry.len(),
        route.len(),
        facts.len()
    );
    for problem in &problems {
        println!("  warning: {problem}");
    }
    println!("check-data: {} warnings", problems.len());
    Ok(())
}
