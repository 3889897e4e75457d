use crate::layout::site_context::use_site;
use crate::shared::components::RevealCard;
use contracts::shared::animation::ReadMoreState;
use contracts::shared::config::BlogPost;
use leptos::prelude::*;

#[component]
pub fn BlogSection() -> impl IntoView {
    let site = use_site();
    let posts = site.config.blog.clone();

    view! {
        <section id="blog" class="blog-section">
            <h2>"From the Blog"</h2>
            {posts
                .into_iter()
                .map(|post| {
                    view! {
                        <RevealCard class="blog-post">
                            <BlogPostCard post=post />
                        </RevealCard>
                    }
                })
                .collect_view()}
        </section>
    }
}

#[component]
fn BlogPostCard(post: BlogPost) -> impl IntoView {
    let state = RwSignal::new(ReadMoreState::default());

    view! {
        <article class="blog-post__body">
            <h3>{post.title}</h3>
            <span class="post-date">{post.date}</span>
            <p class="excerpt">{post.excerpt}</p>
            <div
                class="full-content"
                style=move || if state.get().expanded { "display: block;" } else { "display: none;" }
            >
                <p>{post.body}</p>
            </div>
            <button
                class="read-more-btn"
                on:click=move |_| state.update(|s| s.toggle())
            >
                {move || state.get().button_label()}
            </button>
        </article>
    }
}
