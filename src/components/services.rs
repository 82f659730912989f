use std::rc::Rc;

use web_sys::{MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::carousel::Carousel;
use crate::catalog::default_catalog;
use crate::components::contact_modal::ContactModal;

const STARTING_CARD: usize = 7;

/// Apply a mutation to the carousel state, re-rendering only when the state
/// actually changed (drag moves fire on every pointer event).
fn update_carousel(handle: &UseStateHandle<Carousel>, mutate: impl FnOnce(&mut Carousel)) {
    let mut next = (**handle).clone();
    mutate(&mut next);
    if next != **handle {
        handle.set(next);
    }
}

#[function_component(ServicesSection)]
pub fn services_section() -> Html {
    let carousel = use_state(|| Carousel::new(Rc::new(default_catalog()), STARTING_CARD));
    let show_form = use_state(|| false);
    let selected_service = use_state(|| STARTING_CARD);

    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| update_carousel(&carousel, |c| c.previous()))
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| update_carousel(&carousel, |c| c.next()))
    };

    let on_mouse_down = {
        let carousel = carousel.clone();
        Callback::from(move |e: MouseEvent| {
            update_carousel(&carousel, |c| c.drag_start(e.client_x() as f64));
        })
    };
    let on_mouse_move = {
        let carousel = carousel.clone();
        Callback::from(move |e: MouseEvent| {
            update_carousel(&carousel, |c| c.drag_move(e.client_x() as f64));
        })
    };
    let on_mouse_end = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| update_carousel(&carousel, |c| c.drag_end()))
    };
    let on_touch_start = {
        let carousel = carousel.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                update_carousel(&carousel, |c| c.drag_start(touch.client_x() as f64));
            }
        })
    };
    let on_touch_move = {
        let carousel = carousel.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                update_carousel(&carousel, |c| c.drag_move(touch.client_x() as f64));
            }
        })
    };
    let on_touch_end = {
        let carousel = carousel.clone();
        Callback::from(move |_: TouchEvent| update_carousel(&carousel, |c| c.drag_end()))
    };

    let on_get_in_touch = {
        let carousel = carousel.clone();
        let show_form = show_form.clone();
        let selected_service = selected_service.clone();
        Callback::from(move |_: MouseEvent| {
            selected_service.set(carousel.active_index());
            show_form.set(true);
        })
    };
    let on_close_form = {
        let show_form = show_form.clone();
        Callback::from(move |_| show_form.set(false))
    };

    let current_line = carousel.current_line().unwrap_or_default().to_string();
    let line_tabs = carousel
        .catalog()
        .lines()
        .iter()
        .map(|line| {
            let name = line.name.clone();
            let class = if name == current_line {
                "line-tab active"
            } else {
                "line-tab"
            };
            let onclick = {
                let carousel = carousel.clone();
                let name = name.clone();
                Callback::from(move |_: MouseEvent| {
                    update_carousel(&carousel, |c| c.jump_to_line(&name));
                })
            };
            html! {
                <button key={name.clone()} class={class} {onclick}>{ &line.name }</button>
            }
        })
        .collect::<Html>();

    let active_indicator = carousel.active_indicator();
    let indicators = (0..carousel.indicator_count())
        .map(|i| {
            let class = if i == active_indicator {
                "indicator-dot active"
            } else {
                "indicator-dot"
            };
            let onclick = {
                let carousel = carousel.clone();
                Callback::from(move |_: MouseEvent| {
                    update_carousel(&carousel, |c| c.jump_to_indicator(i));
                })
            };
            html! { <button key={i} class={class} {onclick}></button> }
        })
        .collect::<Html>();

    let side_card = |cap: &crate::catalog::Capability| {
        html! {
            <div class="service-card side">
                <div class="card-icon">{ &cap.icon }</div>
                <h3>{ &cap.title }</h3>
                <p>{ &cap.description }</p>
            </div>
        }
    };

    html! {
        <section class="services-section" id="services">
            <style>
                {r#"
                .services-section {
                    padding: 4rem 0;
                    background: #fff;
                    position: relative;
                }
                .services-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    max-width: 1100px;
                    margin: 0 auto 2.5rem;
                    padding: 0 1rem;
                }
                .services-header h2 {
                    font-size: 2rem;
                    color: #1f2937;
                }
                .get-in-touch-button {
                    background: #2563eb;
                    color: #fff;
                    border: none;
                    border-radius: 6px;
                    padding: 0.75rem 1.5rem;
                    cursor: pointer;
                    font-size: 1rem;
                }
                .get-in-touch-button:hover {
                    background: #1d4ed8;
                }
                .line-tabs {
                    display: flex;
                    justify-content: space-between;
                    max-width: 1100px;
                    margin: 0 auto 2rem;
                    overflow-x: auto;
                }
                .line-tab {
                    background: none;
                    border: none;
                    border-bottom: 2px solid transparent;
                    padding: 0.5rem 1rem;
                    color: #4b5563;
                    white-space: nowrap;
                    cursor: pointer;
                }
                .line-tab.active {
                    color: #2563eb;
                    font-weight: 700;
                    border-bottom-color: #2563eb;
                }
                .carousel {
                    position: relative;
                    overflow: hidden;
                    user-select: none;
                }
                .carousel.dragging {
                    cursor: grabbing;
                }
                .carousel-row {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    padding: 2rem 4rem;
                }
                .carousel-arrow {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    background: #fff;
                    border: none;
                    border-radius: 50%;
                    width: 2.5rem;
                    height: 2.5rem;
                    box-shadow: 0 2px 6px rgba(0, 0, 0, 0.15);
                    cursor: pointer;
                    z-index: 5;
                }
                .carousel-arrow.left { left: 0.5rem; }
                .carousel-arrow.right { right: 0.5rem; }
                .service-card {
                    width: 16rem;
                    min-height: 18rem;
                    background: #fff;
                    border-radius: 8px;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    transition: all 0.3s;
                }
                .service-card.side {
                    opacity: 0.6;
                    transform: scale(0.9);
                    min-height: 16rem;
                }
                .card-icon {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }
                .service-card h3 {
                    margin-bottom: 0.5rem;
                    color: #1f2937;
                }
                .service-card p {
                    color: #4b5563;
                    font-size: 0.95rem;
                }
                .get-started-button {
                    margin-top: auto;
                    background: #2563eb;
                    color: #fff;
                    border: none;
                    border-radius: 6px;
                    padding: 0.5rem 1rem;
                    cursor: pointer;
                }
                .indicator-row {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 1rem;
                }
                .indicator-dot {
                    width: 0.75rem;
                    height: 0.75rem;
                    border-radius: 50%;
                    border: none;
                    background: #d1d5db;
                    cursor: pointer;
                }
                .indicator-dot.active {
                    background: #2563eb;
                }
                @media (max-width: 768px) {
                    .service-card.side { display: none; }
                    .carousel-row { padding: 2rem 3rem; }
                }
                "#}
            </style>

            <div class="services-header">
                <h2>{"Our Services"}</h2>
                <button class="get-in-touch-button" onclick={on_get_in_touch.clone()}>
                    {"Get in Touch →"}
                </button>
            </div>

            <div class="line-tabs">
                { line_tabs }
            </div>

            <div
                class={classes!("carousel", carousel.is_dragging().then_some("dragging"))}
                onmousedown={on_mouse_down}
                onmousemove={on_mouse_move}
                onmouseup={on_mouse_end.clone()}
                onmouseleave={on_mouse_end}
                ontouchstart={on_touch_start}
                ontouchmove={on_touch_move}
                ontouchend={on_touch_end}
            >
                <div class="carousel-row">
                    <button class="carousel-arrow left" onclick={on_prev}>{"‹"}</button>
                    {
                        carousel.previous_capability().map(&side_card).unwrap_or_default()
                    }
                    {
                        carousel.active_capability().map(|cap| html! {
                            <div class="service-card active">
                                <div class="card-icon">{ &cap.icon }</div>
                                <h3>{ &cap.title }</h3>
                                <p>{ &cap.description }</p>
                                <button class="get-started-button" onclick={on_get_in_touch.clone()}>
                                    {"Get Started →"}
                                </button>
                            </div>
                        }).unwrap_or_default()
                    }
                    {
                        carousel.next_capability().map(&side_card).unwrap_or_default()
                    }
                    <button class="carousel-arrow right" onclick={on_next}>{"›"}</button>
                </div>
                <div class="indicator-row">
                    { indicators }
                </div>
            </div>

            {
                if *show_form {
                    html! {
                        <ContactModal
                            selected_service={*selected_service}
                            service_options={Rc::new(carousel.catalog().titles())}
                            on_close={on_close_form}
                        />
                    }
                } else {
                    html! {}
                }
            }
        </section>
    }
}
