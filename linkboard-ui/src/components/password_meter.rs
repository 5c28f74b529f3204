//! Password Strength Meter
//!
//! Four-segment bar driven by the shared strength score.

use leptos::*;

use linkboard::forms::{password_strength, StrengthLabel};

#[component]
pub fn PasswordMeter(
    #[prop(into)]
    password: Signal<String>,
) -> impl IntoView {
    let score = create_memo(move |_| password.with(|p| password_strength(p)));

    view! {
        <div class="mt-2 space-y-1">
            <div class="flex space-x-1">
                {[25u8, 50, 75, 100].into_iter().map(|threshold| view! {
                    <div class=move || {
                        let base = "h-1 flex-1 rounded";
                        if score.get() >= threshold {
                            format!("{} {}", base, bar_color(score.get()))
                        } else {
                            format!("{} bg-gray-200", base)
                        }
                    } />
                }).collect_view()}
            </div>
            {move || {
                password.with(|p| !p.is_empty()).then(|| view! {
                    <p class="text-xs text-gray-500">
                        "Strength: " {StrengthLabel::from_score(score.get()).as_str()}
                    </p>
                })
            }}
        </div>
    }
}

fn bar_color(score: u8) -> &'static str {
    match StrengthLabel::from_score(score) {
        StrengthLabel::Weak => "bg-red-500",
        StrengthLabel::Fair => "bg-yellow-500",
        StrengthLabel::Good => "bg-blue-500",
        StrengthLabel::Strong => "bg-green-500",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_color_tracks_label() {
        assert_eq!(bar_color(0), "bg-red-500");
        assert_eq!(bar_color(100), "bg-green-500");
    }
}
