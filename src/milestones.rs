use serde::Serialize;

/// One continuity milestone. `color`, `icon` and `gradient` are opaque
/// presentation tokens handed through to the renderer.
#[derive(Debug, Serialize)]
pub struct Tier {
    pub days: i64,
    pub name: &'static str,
    pub label: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub gradient: &'static str,
}

/// Strictly increasing by `days`. The last tier has no successor.
pub static TIERS: [Tier; 7] = [
    Tier {
        days: 7,
        name: "Bronze",
        label: "Primeira Semana",
        color: "bronze",
        icon: "🟠",
        gradient: "var(--gradient-bronze)",
    },
    Tier {
        days: 30,
        name: "Prata",
        label: "Primeiro Mês",
        color: "silver",
        icon: "🟠",
        gradient: "var(--gradient-silver)",
    },
    Tier {
        days: 90,
        name: "Ouro",
        label: "3 Meses",
        color: "gold",
        icon: "🔴",
        gradient: "var(--gradient-gold)",
    },
    Tier {
        days: 180,
        name: "Platina",
        label: "Meio Ano",
        color: "platinum",
        icon: "🟣",
        gradient: "var(--gradient-platinum)",
    },
    Tier {
        days: 365,
        name: "Diamante",
        label: "1 Ano",
        color: "diamond",
        icon: "🟣",
        gradient: "var(--gradient-diamond)",
    },
    Tier {
        days: 730,
        name: "Safira",
        label: "2 Anos",
        color: "sapphire",
        icon: "🔵",
        gradient: "var(--gradient-sapphire)",
    },
    Tier {
        days: 1095,
        name: "Infinito",
        label: "3+ Anos",
        color: "infinity",
        icon: "🔵",
        gradient: "var(--gradient-infinity)",
    },
];

/// Largest tier whose floor was reached. Below the first floor (zero and
/// negative included) the first tier is the default; there is no
/// "no milestone" state.
pub fn current_milestone(days: i64) -> &'static Tier {
    let mut current = &TIERS[0];
    for tier in &TIERS {
        if days >= tier.days {
            current = tier;
        } else {
            break;
        }
    }
    current
}

#[derive(Debug, Serialize)]
pub struct NextMilestone {
    pub tier: &'static Tier,
    pub progress: f64,
    pub remaining: i64,
}

/// First tier whose floor lies ahead, with progress toward it (one
/// decimal place) and the days remaining. `None` once the last floor is
/// reached: maxed out is a terminal state, not an error.
pub fn next_milestone(days: i64) -> Option<NextMilestone> {
    TIERS.iter().find(|tier| days < tier.days).map(|tier| {
        let progress = (days as f64 / tier.days as f64 * 1000.0).round() / 10.0;
        NextMilestone {
            tier,
            progress,
            remaining: tier.days - days,
        }
    })
}

pub fn progress_text(days: i64) -> String {
    match next_milestone(days) {
        Some(next) => {
            let unit = if next.remaining == 1 { "dia" } else { "dias" };
            format!("{} {} para {}", next.remaining, unit, next.tier.name)
        }
        None => "Marco máximo atingido!".to_string(),
    }
}
