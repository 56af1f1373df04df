use leptos::prelude::*;

/// One entry in the marketing feature grid.
struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

/// The product sells exactly these six capabilities; the grid renders them
/// in order regardless of viewport.
static FEATURES: [Feature; 6] = [
    Feature {
        icon: "RTA",
        title: "Real-Time Analytics",
        description: "Monitor CPU, GPU, and RAM usage with millisecond precision using our low-latency engine.",
    },
    Feature {
        icon: "HWL",
        title: "Hardware Locked",
        description: "Advanced HWID security ensures your license is permanently tied to your specific motherboard.",
    },
    Feature {
        icon: "TMP",
        title: "Tamper Protection",
        description: "Registry-based security with SHA-256 signatures prevents unauthorized trial modifications.",
    },
    Feature {
        icon: "ZRO",
        title: "Zero Overhead",
        description: "An optimized native engine that uses less than 1% of your system resources.",
    },
    Feature {
        icon: "PRC",
        title: "Process Tracking",
        description: "Automatically detects and displays the top resource-hogging processes slowing down your PC.",
    },
    Feature {
        icon: "UNI",
        title: "Universal Support",
        description: "Fully compatible with all modern Intel, AMD, and NVIDIA hardware architectures.",
    },
];

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="features">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Engineered for Performance"</h2>
                    <div class="section-rule"></div>
                    <p class="section-description">
                        "Everything you need to monitor, secure, and optimize your machine in one lightweight package."
                    </p>
                </div>
                <div class="features-grid">
                    {FEATURES
                        .iter()
                        .map(|feature| view! { <FeatureCard feature=feature /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: &'static Feature) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class="feature-icon">{feature.icon}</div>
            <h3 class="feature-title">{feature.title}</h3>
            <p class="feature-description">{feature.description}</p>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_grid_has_six_entries() {
        assert_eq!(FEATURES.len(), 6);
    }

    #[test]
    fn test_feature_titles_are_unique() {
        let mut titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), FEATURES.len());
    }

    #[test]
    fn test_feature_copy_is_nonempty() {
        for feature in &FEATURES {
            assert!(!feature.icon.is_empty());
            assert!(!feature.title.is_empty());
            assert!(!feature.description.is_empty());
        }
    }
}
