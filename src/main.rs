#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod sample;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use profilecard_core::Profile;
use tracing_subscriber::EnvFilter;

use crate::context::LaunchConfig;

/// Global launch configuration, set from command line
static LAUNCH: OnceLock<LaunchConfig> = OnceLock::new();

/// Default data directory for the preference database
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("profilecard")
}

/// Get the launch configuration (set from command line or default)
pub fn get_launch_config() -> LaunchConfig {
    LAUNCH.get().cloned().unwrap_or_else(|| LaunchConfig {
        data_dir: default_data_dir(),
        profile: sample::sample_profile(),
        memory_only: false,
    })
}

/// Profile Card - student profile viewer
#[derive(Parser, Debug)]
#[command(name = "profilecard-desktop")]
#[command(about = "Profile Card - a student profile card with theme, badges and contact form")]
struct Args {
    /// Directory for the preference database
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Profile JSON file to display (defaults to a built-in sample)
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Keep the theme preference in memory only
    #[arg(long)]
    memory: bool,
}

/// Load the requested profile, falling back to the sample on any error
fn load_profile(path: Option<&PathBuf>) -> Profile {
    let Some(path) = path else {
        return sample::sample_profile();
    };

    match Profile::load(path) {
        Ok(profile) => {
            tracing::info!("Loaded profile from {:?}", path);
            profile
        }
        Err(e) => {
            tracing::error!("Failed to load profile {:?}: {}. Showing sample profile.", path, e);
            sample::sample_profile()
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);
    let profile = load_profile(args.profile.as_ref());

    // Window title with the student's name
    let title = if profile.name.is_empty() {
        "Profile Card".to_string()
    } else {
        format!("Profile Card - {}", profile.name)
    };

    tracing::info!("Starting '{}' with data dir: {:?}", title, data_dir);

    let _ = LAUNCH.set(LaunchConfig {
        data_dir,
        profile,
        memory_only: args.memory,
    });

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(560.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_parse_flags() {
        let args = Args::parse_from([
            "profilecard-desktop",
            "-d",
            "/tmp/pc",
            "--profile",
            "me.json",
            "--memory",
        ]);
        assert_eq!(args.data_dir, Some(PathBuf::from("/tmp/pc")));
        assert_eq!(args.profile, Some(PathBuf::from("me.json")));
        assert!(args.memory);
    }

    #[test]
    fn missing_profile_file_falls_back_to_sample() {
        let path = PathBuf::from("/nonexistent/profilecard/profile.json");
        let profile = load_profile(Some(&path));
        assert_eq!(profile, sample::sample_profile());
    }
}
