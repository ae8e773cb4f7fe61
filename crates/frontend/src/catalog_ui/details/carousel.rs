use catalog::Carousel;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Hero image carousel. Single-image records get the same widget with the
/// controls hidden, so one component covers both data shapes.
#[component]
pub fn ImageCarousel(images: Vec<String>) -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(images.len()));
    let images = StoredValue::new(images);

    let current_image = move || {
        let index = carousel.get().index();
        images.with_value(|urls| urls.get(index).cloned().unwrap_or_default())
    };
    let multiple = images.with_value(|urls| urls.len() > 1);

    view! {
        <div class="relative rounded-2xl overflow-hidden shadow-lg">
            <img
                class="w-full aspect-[16/9] object-cover"
                src=current_image
                alt="Project image"
            />

            <Show when=move || multiple>
                <button
                    class="absolute left-4 top-1/2 -translate-y-1/2 p-2 rounded-full bg-black/40 text-white hover:bg-black/60 transition-colors"
                    aria-label="Previous image"
                    on:click=move |_| carousel.update(|c| c.prev())
                >
                    {icon("chevron-left")}
                </button>
                <button
                    class="absolute right-4 top-1/2 -translate-y-1/2 p-2 rounded-full bg-black/40 text-white hover:bg-black/60 transition-colors"
                    aria-label="Next image"
                    on:click=move |_| carousel.update(|c| c.next())
                >
                    {icon("chevron-right")}
                </button>

                <div class="absolute bottom-4 left-1/2 -translate-x-1/2 flex gap-2">
                    {(0..images.with_value(|urls| urls.len()))
                        .map(|i| {
                            view! {
                                <button
                                    class=move || {
                                        if carousel.get().index() == i {
                                            "w-2.5 h-2.5 rounded-full bg-white"
                                        } else {
                                            "w-2.5 h-2.5 rounded-full bg-white/50 hover:bg-white/75"
                                        }
                                    }
                                    aria-label=format!("Go to image {}", i + 1)
                                    on:click=move |_| carousel.update(|c| c.jump_to(i))
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
