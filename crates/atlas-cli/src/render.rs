use atlas_core::Philosopher;

/// Human-readable year: negative values are BCE.
pub fn format_year(year: i32) -> String {
    if year < 0 {
        format!("{} BCE", -year)
    } else {
        format!("{year} CE")
    }
}

pub fn format_lifespan(p: &Philosopher) -> String {
    format!("{} – {}", format_year(p.birth_year), format_year(p.death_year))
}

/// One-line listing entry.
pub fn row(p: &Philosopher) -> String {
    format!(
        "{:<14} {} ({}), {} — {}",
        p.id,
        p.name,
        p.name_en,
        format_lifespan(p),
        p.school
    )
}

/// Full detail block, the fields the atlas detail panel shows.
pub fn detail(p: &Philosopher) -> String {
    let mut out = String::new();

    out.push_str(&format!("{} ({})\n", p.name, p.name_en));
    out.push_str(&format!("  lived:   {}\n", format_lifespan(p)));
    out.push_str(&format!("  born in: {}\n", p.birth_city));
    out.push_str(&format!("  period:  {}\n", p.period));
    out.push_str(&format!("  school:  {}\n", p.school));

    if let Some(bio) = &p.biography {
        out.push_str(&format!("\n{bio}\n"));
    }

    if !p.works.is_empty() {
        out.push_str("\nworks:\n");
        for work in &p.works {
            match &work.description {
                Some(desc) => out.push_str(&format!("  - {}: {desc}\n", work.title)),
                None => out.push_str(&format!("  - {}\n", work.title)),
            }
        }
    }

    if !p.key_ideas.is_empty() {
        out.push_str(&format!("\nkey ideas: {}\n", p.key_ideas.join(", ")));
    }

    if !p.influences.is_empty() {
        out.push_str(&format!("influenced by: {}\n", p.influences.join(", ")));
    }

    if !p.influenced.is_empty() {
        out.push_str(&format!("influenced: {}\n", p.influenced.join(", ")));
    }

    out
}
