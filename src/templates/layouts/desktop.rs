use maud::{html, Markup, PreEscaped, DOCTYPE};

const SITE_NAME: &str = "Hill Country Homes";

// Inlined so every page is self-contained; there is no static file route.
const SITE_CSS: &str = "\
body { font-family: system-ui, sans-serif; margin: 0; color: #222; background: #f7f7fb; }
.site-header { display: flex; align-items: center; gap: 0.75rem; padding: 1rem 2rem; background: #fff; border-bottom: 1px solid #e5e5ef; }
.site-header .brand { font-weight: 700; color: #524ed2; text-decoration: none; }
.site-header nav { margin-left: auto; }
.site-header ul { display: flex; gap: 1.25rem; list-style: none; margin: 0; padding: 0; }
main { max-width: 1200px; margin: 0 auto; padding: 2rem; }
.search-filters { display: flex; flex-wrap: wrap; gap: 1rem; align-items: flex-end; }
.field { display: flex; flex-direction: column; gap: 0.25rem; }
.listing-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 1.5rem; }
.listing-card { background: #fff; border-radius: 8px; overflow: hidden; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }
.listing-image { position: relative; min-height: 3rem; background: #ddd; }
.listing-image img { width: 100%; height: 200px; object-fit: cover; display: block; }
.badge { position: absolute; top: 0.75rem; left: 0.75rem; background: #524ed2; color: #fff; padding: 0.2rem 0.6rem; border-radius: 4px; font-size: 0.8rem; }
.favorite { position: absolute; top: 0.5rem; right: 0.5rem; }
.heart { border: none; background: #fff; border-radius: 50%; width: 2.2rem; height: 2.2rem; cursor: pointer; color: #bbb; font-size: 1.1rem; }
.heart.active { color: #e0245e; }
.price { position: absolute; bottom: 0.5rem; left: 0.75rem; margin: 0; font-weight: 700; color: #fff; text-shadow: 0 1px 2px rgba(0,0,0,0.6); }
.listing-body { padding: 1rem; }
.details, .features { display: flex; flex-wrap: wrap; gap: 0.75rem; list-style: none; padding: 0; }
.features li { background: #eef; border-radius: 4px; padding: 0.1rem 0.5rem; font-size: 0.8rem; }
.site-footer { text-align: center; padding: 2rem; color: #777; font-size: 0.9rem; }
";

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | " (SITE_NAME) }
                style { (PreEscaped(SITE_CSS)) }
            }
            body {
                header class="site-header" {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#524ed2"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        class="icon icon-home"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                        path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                        path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                    }
                    a href="/" class="brand" { (SITE_NAME) }
                    nav {
                        ul {
                            li { a href="/#properties" { "Properties" } }
                            li { a href="/listings.json" { "Data" } }
                        }
                    }
                }

                (content)

                footer class="site-footer" {
                    p { "© " (SITE_NAME) ". Listings are provided for illustration and may change without notice." }
                }
            }
        }
    }
}
