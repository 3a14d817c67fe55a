use cafe_data::{DimensionCoverage, Favorite, FetchPhase, FetchState, Location, RatingRecord, RatingSummary, Toast};
use colored::Colorize;

/// Print a success message
pub fn success_message(message: &str) {
    println!("{} {}", "✅".green(), message.green());
}

/// Print a warning message
pub fn warning_message(message: &str) {
    println!("{} {}", "⚠️ ".yellow(), message.yellow());
}

/// Print an error message
pub fn error_message(message: &str) {
    eprintln!("{} {}", "❌".red(), message.red().bold());
}

/// Print a section header to separate logical sections of output
pub fn section_header(title: &str) {
    println!("\n{}", format!("==== {} ====", title).cyan().bold());
}

/// Print a simple informational message
pub fn info_message(message: &str) {
    println!("{} {}", "ℹ️ ".blue(), message.blue());
}

/// Toasts are shown as warnings; they never block the listing
pub fn toasts(toasts: &[Toast]) {
    for toast in toasts {
        warning_message(&toast.message);
    }
}

/// Render the non-data part of a state. Returns `true` when data should follow.
pub fn state_banner<T>(state: &FetchState<T>, empty_hint: &str) -> bool {
    match state.phase {
        FetchPhase::ClientVisibleError => {
            error_message(state.error.as_deref().unwrap_or("Request failed"));
            false
        }
        FetchPhase::Idle => {
            info_message("Sign in with --token to see this list");
            false
        }
        FetchPhase::EmptyByNotFound => {
            info_message(empty_hint);
            false
        }
        FetchPhase::Success | FetchPhase::Loading => true,
    }
}

pub fn locations(locations: &[Location]) {
    for location in locations {
        let featured = if location.is_featured { " ★".yellow().to_string() } else { String::new() };
        println!(
            "  {} {} ({}) - {} cafes{}",
            location.name.bright_white().bold(),
            location.country_code.dimmed(),
            location.slug,
            location.cafe_count,
            featured
        );
    }
}

pub fn reviews(records: &[RatingRecord]) {
    for record in records {
        let author = record.author_name.as_deref().unwrap_or("Anonymous");
        let cafe = record
            .cafe_name
            .as_deref()
            .map(|name| format!(" @ {}", name))
            .unwrap_or_default();
        println!(
            "  {} {}{} {}",
            format!("{:.0}★", record.overall).yellow(),
            author.bright_white(),
            cafe,
            record.created_at.format("%Y-%m-%d").to_string().dimmed()
        );
        if !record.body.is_empty() {
            println!("     {}", record.body);
        }
    }
}

pub fn favorites(favorites: &[Favorite]) {
    for favorite in favorites {
        println!(
            "  {} ({}) {} {:.1}★ from {} reviews",
            favorite.cafe.name.bright_white().bold(),
            favorite.cafe.slug,
            favorite.cafe.city.dimmed(),
            favorite.cafe.rating_avg,
            favorite.cafe.rating_count
        );
    }
}

pub fn summary(summary: &RatingSummary, coverage: &DimensionCoverage) {
    let rows = [
        ("Overall", summary.overall, coverage.overall),
        ("Wifi", summary.wifi, coverage.wifi),
        ("Power", summary.power, coverage.power),
        ("Noise", summary.noise, coverage.noise),
        ("Coffee", summary.coffee, coverage.coffee),
    ];

    for (label, value, count) in rows {
        println!(
            "  {:<8} {} {}",
            label,
            format!("{:.1}", value).bright_white().bold(),
            format!("({} ratings)", count).dimmed()
        );
    }
}
