//! Focal point picker for portraits.
//!
//! The image is shown whole (`object-contain`) so a click has to be mapped
//! through the letterbox before it becomes a percentage of the image.

use dioxus::prelude::*;
use legends_domain::{FocalPoint, RenderedBounds};

use crate::presentation::utils::dom;
use crate::presentation::utils::styles::object_position;

const PICKER_IMAGE_ID: &str = "focal-point-image";

async fn measure() -> Option<RenderedBounds> {
    let (container, natural) = dom::image_metrics(PICKER_IMAGE_ID).await?;
    RenderedBounds::contain(container, natural)
}

#[component]
pub fn FocalPointPicker(
    src: String,
    value: FocalPoint,
    on_change: EventHandler<FocalPoint>,
) -> Element {
    let mut bounds = use_signal(|| None::<RenderedBounds>);

    let marker = bounds().map(|b| value.marker_in(b));
    let preview_style = object_position(value);

    rsx! {
        div {
            class: "space-y-4",
            div {
                class: "flex flex-col lg:flex-row gap-6",
                div {
                    class: "flex-1",
                    p { class: "text-xs text-white/40 mb-2 text-left", "Tap or click to set the focal point" }
                    div {
                        class: "relative h-64 cursor-crosshair overflow-hidden rounded-lg border border-white/10 bg-black/40",
                        onclick: move |evt: MouseEvent| async move {
                            let click = evt.element_coordinates();
                            let Some(measured) = measure().await else {
                                return;
                            };
                            bounds.set(Some(measured));
                            on_change.call(FocalPoint::from_click(click.x, click.y, measured));
                        },
                        img {
                            id: PICKER_IMAGE_ID,
                            src: "{src}",
                            alt: "Click to set focal point",
                            class: "w-full h-full object-contain pointer-events-none",
                            draggable: false,
                            onload: move |_| async move {
                                bounds.set(measure().await);
                            },
                        }
                        if let Some((left, top)) = marker {
                            div {
                                class: "absolute w-8 h-8 -translate-x-1/2 -translate-y-1/2 pointer-events-none",
                                style: "left: {left}px; top: {top}px;",
                                div {
                                    class: "absolute inset-0 flex items-center justify-center",
                                    div { class: "w-full h-0.5 bg-[#F5B800]" }
                                }
                                div {
                                    class: "absolute inset-0 flex items-center justify-center",
                                    div { class: "h-full w-0.5 bg-[#F5B800]" }
                                }
                                div {
                                    class: "absolute inset-0 flex items-center justify-center",
                                    div { class: "w-3 h-3 rounded-full bg-[#F5B800] border-2 border-black" }
                                }
                            }
                        }
                    }
                }
                div {
                    class: "w-full lg:w-40",
                    p { class: "text-xs text-white/40 mb-2 text-left", "Mobile preview" }
                    div {
                        class: "relative h-48 w-full lg:w-40 overflow-hidden rounded-lg border border-white/10 bg-black/40",
                        img {
                            src: "{src}",
                            alt: "Position preview",
                            class: "h-full w-full object-cover transition-all duration-200",
                            style: "{preview_style}",
                        }
                    }
                }
            }
            p { class: "text-[10px] text-white/30 text-left", "The focal point stays centered in the card thumbnail on all screen sizes" }
        }
    }
}
