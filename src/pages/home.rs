use yew::prelude::*;

use crate::components::services::ServicesSection;
use crate::components::usp::UspSection;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <style>
                {r#"
                .home-page {
                    font-family: 'Segoe UI', system-ui, sans-serif;
                    color: #1f2937;
                }
                .hero {
                    background: linear-gradient(135deg, #1e3a8a, #2563eb);
                    color: #fff;
                    text-align: center;
                    padding: 5rem 1rem;
                }
                .hero h1 {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                }
                .hero p {
                    color: #bfdbfe;
                    font-size: 1.1rem;
                    max-width: 40rem;
                    margin: 0 auto;
                }
                "#}
            </style>
            <header class="hero">
                <h1>{"EZ Works"}</h1>
                <p>{"On-demand business services, delivered by experts. Explore our service \
                    lines below and get in touch to get started."}</p>
            </header>
            <ServicesSection />
            <UspSection />
        </div>
    }
}
