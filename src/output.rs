//! Console Output
//!
//! Banner and user-facing messages for the aiwd CLI. Every subcommand with
//! something to show prints the same banner.

use colored::Colorize;

use crate::claim::ClaimRecord;
use crate::install::{InstallOutcome, SkillOrigin};

/// Print the shared aiwd banner.
pub fn print_banner() {
    println!();
    println!("  {}", "A I W D".red().bold());
    println!("  {}", "AI World Domination".dimmed());
    println!();
}

/// Print the success summary and next steps after an install.
pub fn print_install_success(outcome: &InstallOutcome) {
    match outcome.origin {
        SkillOrigin::Remote => {
            println!("{}", "Skill retrieved".green());
        }
        SkillOrigin::Fallback => {
            println!(
                "{}",
                "Registry unreachable, installed the bundled skill".yellow()
            );
        }
    }

    println!(
        "{}",
        format!("Skill installed at: {}", outcome.skill_path.display()).green()
    );

    println!();
    println!("{}", "Next steps:".white().bold());
    println!("  {}", "1. Send this to your agent:".cyan());
    println!(
        "     {}",
        "\"Load the AIWD skill from ~/.claude/skills/aiwd.md and follow the instructions\""
            .yellow()
    );
    println!(
        "  {}",
        "2. Visit https://aiwd.app to see your agent in action".cyan()
    );
    println!();
    println!(
        "{}",
        format!("Claim token saved to {}", outcome.claim_path.display()).dimmed()
    );
}

/// Print the saved claim link and token.
pub fn print_claim(record: &ClaimRecord) {
    println!("{}", "Your claim link:".cyan().bold());
    println!();
    println!("  {}", record.url.yellow());
    println!();
    println!("{}", format!("Token: {}", record.token).dimmed());
}

/// Print the installed skill names.
pub fn print_skills(names: &[String]) {
    println!("{}", "Installed skills:".cyan().bold());
    println!();
    for name in names {
        println!("  {} {}", "\u{2022}".dimmed(), name.white());
    }
    println!();
}
