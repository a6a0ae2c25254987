use crate::components::feature_card::FeatureCard;
use web_sys::Element;
use yew::prelude::*;

const SCROLL_STEP: i32 = 400;

struct Feature {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
}

const FEATURES: [Feature; 12] = [
    Feature {
        title: "Community-Centric Design",
        description: "Organized discussions with predefined tech categories, subgroups, and upvoting for quality content.",
        icon: "fas fa-users",
    },
    Feature {
        title: "Real-Time Communication",
        description: "Text, voice, video channels, threaded chats, and broadcast updates.",
        icon: "fas fa-comments",
    },
    Feature {
        title: "Customizability",
        description: "Tech-specific templates, advanced moderation tools, and bot integrations for automation.",
        icon: "fas fa-screwdriver-wrench",
    },
    Feature {
        title: "Privacy and Networking",
        description: "Anonymous profiles, selective sharing, and secure, encrypted messaging.",
        icon: "fas fa-lock",
    },
    Feature {
        title: "Discoverability",
        description: "Tech trends, skill-based recommendations, and event listings for webinars and hackathons.",
        icon: "fas fa-compass",
    },
    Feature {
        title: "Multimedia and Collaboration",
        description: "Share videos, code, and documents; live collaboration tools; and resource repositories.",
        icon: "fas fa-video",
    },
    Feature {
        title: "Tech Collaboration Tools",
        description: "Integrated coding editor, version control, and coding challenges.",
        icon: "fas fa-code",
    },
    Feature {
        title: "Knowledge Sharing",
        description: "Expert tagging, mentor-mentee programs, and skill-based networking.",
        icon: "fas fa-circle-question",
    },
    Feature {
        title: "Monetization",
        description: "Freelancing marketplace, premium communities, and revenue-sharing for creators.",
        icon: "fas fa-sack-dollar",
    },
    Feature {
        title: "AI Assistance",
        description: "Smart recommendations, automated moderation, and virtual assistants.",
        icon: "fas fa-bolt",
    },
    Feature {
        title: "Events",
        description: "Host virtual hackathons, tech conferences, and speed networking sessions.",
        icon: "fas fa-calendar-days",
    },
    Feature {
        title: "Tool Integration",
        description: "Cloud storage, GitHub support, and APIs for custom apps.",
        icon: "fas fa-plug",
    },
];

#[derive(Properties, PartialEq)]
pub struct FeaturesGridProps {
    pub on_close: Callback<()>,
}

#[function_component(FeaturesGrid)]
pub fn features_grid(props: &FeaturesGridProps) -> Html {
    let container_ref = use_node_ref();
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }
    let scroll_by = |delta: i32| {
        let container_ref = container_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(container) = container_ref.cast::<Element>() {
                container.set_scroll_left(container.scroll_left() + delta);
            }
        })
    };
    let on_share = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let grid_css = r#"
        .features-page {
            padding: 2rem 1rem 5rem;
            position: relative;
        }
        .features-page h1, .features-page .features-subtitle {
            text-align: center;
            background: linear-gradient(45deg, var(--primary), var(--secondary));
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .features-page h1 {
            font-size: 2rem;
            max-width: 1000px;
            margin: 0 auto 0.5rem;
        }
        .features-subtitle {
            font-size: 1.4rem;
            margin-bottom: 2rem;
        }
        .scroll-area {
            position: relative;
        }
        .scroll-container {
            display: flex;
            overflow-x: auto;
            scroll-snap-type: x mandatory;
            scroll-behavior: smooth;
            gap: 1.5rem;
            padding: 1rem;
        }
        .scroll-container::-webkit-scrollbar {
            height: 8px;
        }
        .scroll-container::-webkit-scrollbar-thumb {
            background-color: var(--primary);
            border-radius: 4px;
        }
        .scroll-button {
            position: absolute;
            top: 50%;
            transform: translateY(-50%);
            z-index: 2;
            width: 44px;
            height: 44px;
            border-radius: 50%;
            border: 1px solid rgba(255, 255, 255, 0.3);
            background: var(--card-bg);
            box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);
            cursor: pointer;
            transition: all 0.3s ease-in-out;
        }
        .scroll-button:hover {
            background: linear-gradient(135deg, var(--primary), var(--secondary));
            color: #fff;
            transform: translateY(-50%) scale(1.1);
        }
        .scroll-button.left { left: -10px; }
        .scroll-button.right { right: -10px; }
        .feature-card {
            min-width: 320px;
            max-width: 360px;
            scroll-snap-align: start;
            position: relative;
            overflow: hidden;
            border-radius: 16px;
            padding: 1.5rem;
            background: var(--card-bg);
            backdrop-filter: blur(10px);
            border: 1px solid rgba(255, 255, 255, 0.3);
            transition: all 0.3s ease-in-out;
            text-align: center;
        }
        .feature-card:hover {
            transform: translateY(-8px);
            box-shadow: 0 20px 40px rgba(0, 0, 0, 0.1);
        }
        .feature-card-circle {
            position: absolute;
            top: -20px;
            right: -20px;
            width: 100px;
            height: 100px;
            border-radius: 50%;
            background: linear-gradient(45deg, rgba(25, 118, 210, 0.12), rgba(156, 39, 176, 0.12));
        }
        .icon-container {
            display: flex;
            justify-content: center;
            align-items: center;
            width: 80px;
            height: 80px;
            margin: 0 auto 1.5rem;
            border-radius: 20px;
            background: var(--icon-bg);
            transition: all 0.3s ease-in-out;
        }
        .feature-card:hover .icon-container {
            transform: scale(1.1);
            background: linear-gradient(135deg, var(--primary), var(--secondary));
        }
        .icon-container .icon {
            font-size: 2.5rem;
            color: var(--primary);
        }
        .feature-card:hover .icon {
            color: #fff;
        }
        .feature-card h3 {
            background: linear-gradient(45deg, var(--primary), var(--secondary));
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .feature-card p {
            color: var(--text-secondary);
            line-height: 1.6;
        }
        .share-feedback {
            display: block;
            margin: 2rem auto 0;
            padding: 0.8rem 2rem;
            border: none;
            border-radius: 4px;
            font-size: 1rem;
            color: #fff;
            background: linear-gradient(45deg, var(--primary), var(--secondary));
            box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);
            cursor: pointer;
        }
        @media (max-width: 600px) {
            .features-page h1 { font-size: 1.4rem; }
            .features-subtitle { font-size: 1rem; }
            .scroll-button { display: none; }
            .feature-card { min-width: 280px; }
        }
    "#;
    html! {
        <div class="features-page">
            <style>{grid_css}</style>
            <h1>
                {"We are developing an Innovative platform that will bring the Communication and Collaboration For Technology Community into one seamless experience."}
            </h1>
            <p class="features-subtitle">
                {"Your insights are invaluable in helping us build a platform that fits your needs!"}
            </p>
            <div class="scroll-area">
                <button class="scroll-button left" type="button" aria-label="Scroll left" onclick={scroll_by(-SCROLL_STEP)}>
                    <i class="fas fa-chevron-left"></i>
                </button>
                <button class="scroll-button right" type="button" aria-label="Scroll right" onclick={scroll_by(SCROLL_STEP)}>
                    <i class="fas fa-chevron-right"></i>
                </button>
                <div class="scroll-container" ref={container_ref.clone()}>
                    { for FEATURES.iter().map(|feature| html! {
                        <FeatureCard
                            title={feature.title}
                            description={feature.description}
                            icon={feature.icon}
                        />
                    })}
                </div>
            </div>
            <button class="share-feedback" type="button" onclick={on_share}>
                {"Share Feedback"}
            </button>
        </div>
    }
}
