use yew::prelude::*;

struct Usp {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
}

const USPS: &[Usp] = &[
    Usp {
        title: "Consistently High Quality",
        description: "Technology has brought us to the threshold of a variety of high-quality \
            services. However, as a team of ex-consultants from top consulting firms, we have \
            constantly found ways to exceed expectations through our commitment to excellence.",
        icon: "🏆",
    },
    Usp {
        title: "Round the Clock Availability",
        description: "Oftentimes our new clients ask us how it is that our service experts are \
            always available, no matter the time of day, day of the week, or season of the year. \
            How do we fulfill our promise of 24/7 support for all your business needs.",
        icon: "🕒",
    },
    Usp {
        title: "Faster than the Fastest",
        description: "Rome may not have been built in a day, but what about your presentation? \
            What about the audio-visual content you promised your client for the next meeting? \
            In a competitive market, speed is often the difference between success and failure.",
        icon: "⚡",
    },
    Usp {
        title: "Information Security",
        description: "ISO 27001:2022 comes within the ISO 27000 family, which is dedicated to \
            the standardization of Information Security Management Systems (ISMS). We implement \
            these standards to ensure your data is always protected.",
        icon: "🔒",
    },
];

#[derive(Properties, PartialEq)]
struct UspCardProps {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
}

/// Card that flips to its description on hover or touch.
#[function_component(UspCard)]
fn usp_card(props: &UspCardProps) -> Html {
    let flipped = use_state(|| false);

    let on_hover_start = {
        let flipped = flipped.clone();
        Callback::from(move |_: MouseEvent| flipped.set(true))
    };
    let on_hover_end = {
        let flipped = flipped.clone();
        Callback::from(move |_: MouseEvent| flipped.set(false))
    };
    let on_touch_start = {
        let flipped = flipped.clone();
        Callback::from(move |_: TouchEvent| flipped.set(true))
    };
    let on_touch_end = {
        let flipped = flipped.clone();
        Callback::from(move |_: TouchEvent| flipped.set(false))
    };

    let inner_class = if *flipped {
        "usp-card-inner flipped"
    } else {
        "usp-card-inner"
    };

    html! {
        <div
            class="usp-card"
            onmouseenter={on_hover_start}
            onmouseleave={on_hover_end}
            ontouchstart={on_touch_start}
            ontouchend={on_touch_end}
        >
            <div class={inner_class}>
                <div class="usp-card-front">
                    <div class="usp-icon">{ props.icon }</div>
                    <h3>{ props.title }</h3>
                </div>
                <div class="usp-card-back">
                    <p>{ props.description }</p>
                    <a href="#services">{"Read More →"}</a>
                </div>
            </div>
        </div>
    }
}

#[function_component(UspSection)]
pub fn usp_section() -> Html {
    html! {
        <section class="usp-section">
            <style>
                {r#"
                .usp-section {
                    padding: 4rem 1rem;
                    background: #f9fafb;
                }
                .usp-section > h2 {
                    text-align: center;
                    font-size: 2rem;
                    color: #1f2937;
                    margin-bottom: 2.5rem;
                }
                .usp-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                    max-width: 1100px;
                    margin: 0 auto;
                }
                .rule-panel {
                    background: #fff;
                    border-radius: 8px;
                    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.1);
                    padding: 2rem;
                }
                .rule-panel h3 {
                    font-size: 1.5rem;
                    color: #1f2937;
                    margin-bottom: 1.5rem;
                }
                .rule-entry {
                    display: flex;
                    align-items: flex-start;
                    margin-bottom: 1.5rem;
                }
                .rule-number {
                    flex-shrink: 0;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    background: #dbeafe;
                    color: #2563eb;
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-right: 1rem;
                }
                .rule-entry h4 {
                    font-size: 1.1rem;
                    margin-bottom: 0.5rem;
                }
                .rule-entry p {
                    color: #4b5563;
                }
                .usp-cards {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }
                .usp-card {
                    height: 16rem;
                    perspective: 1000px;
                }
                .usp-card-inner {
                    position: relative;
                    width: 100%;
                    height: 100%;
                    transition: transform 0.5s;
                    transform-style: preserve-3d;
                }
                .usp-card-inner.flipped {
                    transform: rotateY(180deg);
                }
                .usp-card-front,
                .usp-card-back {
                    position: absolute;
                    inset: 0;
                    backface-visibility: hidden;
                    border-radius: 8px;
                    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.1);
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                }
                .usp-card-front {
                    background: #fff;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                }
                .usp-icon {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }
                .usp-card-back {
                    background: #2563eb;
                    color: #fff;
                    transform: rotateY(180deg);
                }
                .usp-card-back p {
                    font-size: 0.875rem;
                    flex-grow: 1;
                    overflow-y: auto;
                    margin-bottom: 1rem;
                }
                .usp-card-back a {
                    color: #fff;
                    font-weight: 700;
                    text-align: center;
                }
                @media (max-width: 768px) {
                    .usp-grid { grid-template-columns: 1fr; }
                    .usp-cards { grid-template-columns: 1fr; }
                }
                "#}
            </style>

            <h2>{"Why Choose EZ Works"}</h2>

            <div class="usp-grid">
                <div class="rule-panel">
                    <h3>{"The 10-20-30 Rule"}</h3>
                    <div class="rule-entry">
                        <div class="rule-number">{"10"}</div>
                        <div>
                            <h4>{"Ten Slides"}</h4>
                            <p>{"We believe in concise communication. Whether it's presentations \
                                or reports, we keep it focused and impactful. No unnecessary \
                                information - just what you need to make decisions."}</p>
                        </div>
                    </div>
                    <div class="rule-entry">
                        <div class="rule-number">{"20"}</div>
                        <div>
                            <h4>{"Twenty Minutes"}</h4>
                            <p>{"We respect your time. Our solutions are designed to be \
                                understood quickly and implemented effectively. Our process \
                                ensures you get maximum value in minimal time."}</p>
                        </div>
                    </div>
                    <div class="rule-entry">
                        <div class="rule-number">{"30"}</div>
                        <div>
                            <h4>{"Thirty-Point Font"}</h4>
                            <p>{"Clarity is key. We ensure that our communication is always \
                                clear, visible, and easy to understand. No small print or hidden \
                                details - everything is transparent."}</p>
                        </div>
                    </div>
                </div>

                <div class="usp-cards">
                    {
                        USPS.iter().map(|usp| html! {
                            <UspCard
                                key={usp.title}
                                title={usp.title}
                                description={usp.description}
                                icon={usp.icon}
                            />
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
