use yew::prelude::*;

use crate::sections::contact::Contact;
use crate::sections::faq::Faq;
use crate::sections::footer::Footer;
use crate::sections::services::Services;
use crate::sections::stats::Stats;
use crate::sections::testimonials::Testimonials;

#[function_component(Landing)]
pub fn landing() -> Html {
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

    html! {
        <div class="landing-page">
            <section id="home" class="hero">
                <div class="hero-content">
                    <h1>{"We build brands that ship."}</h1>
                    <p class="hero-subtitle">
                        {"PixelForge is a design and engineering studio for teams that \
                          want their next launch to look as good as it works."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#contact" class="hero-cta">{"Start a Project"}</a>
                        <a href="#services" class="hero-link">{"See what we do"}</a>
                    </div>
                </div>
            </section>

            <Services />
            <Stats />
            <Testimonials />
            <Faq />
            <Contact />
            <Footer />

            <style>
                {r#"
                :root {
                    --bg: #f8fafc;
                    --surface: #ffffff;
                    --text: #0f172a;
                    --muted: #64748b;
                    --accent: #2563eb;
                    --accent-soft: rgba(37, 99, 235, 0.12);
                    --border: #e2e8f0;
                }

                body.dark {
                    --bg: #0f172a;
                    --surface: #1e293b;
                    --text: #f1f5f9;
                    --muted: #94a3b8;
                    --accent: #60a5fa;
                    --accent-soft: rgba(96, 165, 250, 0.15);
                    --border: #334155;
                }

                body {
                    margin: 0;
                    background: var(--bg);
                    color: var(--text);
                    font-family: 'Inter', 'Helvetica Neue', Arial, sans-serif;
                    transition: background 0.3s ease, color 0.3s ease;
                }

                section {
                    padding: 5rem 1.5rem;
                    max-width: 1100px;
                    margin: 0 auto;
                }

                section h2 {
                    font-size: 2.2rem;
                    text-align: center;
                    margin: 0 0 2.5rem;
                }

                /* ===== Top nav ===== */
                .top-nav {
                    position: sticky;
                    top: 0;
                    z-index: 10;
                    background: var(--surface);
                    border-bottom: 1px solid var(--border);
                }

                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 0.75rem 1.5rem;
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }

                .nav-logo {
                    font-weight: 800;
                    font-size: 1.25rem;
                    color: var(--text);
                    text-decoration: none;
                    margin-right: auto;
                }

                .nav {
                    display: flex;
                    gap: 1.25rem;
                }

                .nav-link {
                    color: var(--muted);
                    text-decoration: none;
                    padding: 0.25rem 0;
                    border-bottom: 2px solid transparent;
                }

                .nav-link:hover {
                    color: var(--text);
                }

                .nav-link.active {
                    color: var(--accent);
                    border-bottom-color: var(--accent);
                }

                .theme-toggle {
                    background: none;
                    border: 1px solid var(--border);
                    border-radius: 50%;
                    width: 2.25rem;
                    height: 2.25rem;
                    color: var(--text);
                    cursor: pointer;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }

                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: var(--text);
                }

                /* ===== Hero ===== */
                .hero {
                    min-height: 70vh;
                    display: flex;
                    align-items: center;
                    text-align: center;
                }

                .hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }

                .hero-subtitle {
                    color: var(--muted);
                    font-size: 1.2rem;
                    max-width: 600px;
                    margin: 0 auto 2rem;
                }

                .hero-cta-group {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                }

                .hero-cta {
                    background: var(--accent);
                    color: #fff;
                    padding: 0.75rem 1.75rem;
                    border-radius: 8px;
                    text-decoration: none;
                    font-weight: 600;
                }

                .hero-link {
                    color: var(--accent);
                    text-decoration: none;
                    padding: 0.75rem 0;
                }

                /* ===== Services ===== */
                .filter-bar {
                    display: flex;
                    gap: 0.5rem;
                    justify-content: center;
                    margin-bottom: 2rem;
                }

                .filter-btn {
                    background: var(--surface);
                    border: 1px solid var(--border);
                    color: var(--muted);
                    padding: 0.5rem 1.25rem;
                    border-radius: 999px;
                    cursor: pointer;
                }

                .filter-btn.active {
                    background: var(--accent);
                    border-color: var(--accent);
                    color: #fff;
                }

                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
                    gap: 1.5rem;
                }

                .service-card {
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 12px;
                    padding: 1.75rem;
                    transition: opacity 0.2s ease;
                }

                .service-card h3 {
                    margin-top: 0;
                }

                .service-card p {
                    color: var(--muted);
                    line-height: 1.6;
                }

                /* ===== Stats ===== */
                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                    gap: 1.5rem;
                    text-align: center;
                }

                .stat-value {
                    font-size: 2.75rem;
                    font-weight: 800;
                    color: var(--accent);
                }

                .stat-label {
                    color: var(--muted);
                    margin-top: 0.25rem;
                }

                /* ===== Testimonials ===== */
                .testimonial-track {
                    position: relative;
                    max-width: 700px;
                    margin: 0 auto;
                    min-height: 180px;
                }

                .testimonial-card {
                    display: none;
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 12px;
                    padding: 2rem;
                    margin: 0;
                }

                .testimonial-card.active {
                    display: block;
                }

                .testimonial-card blockquote {
                    margin: 0 0 1rem;
                    font-size: 1.15rem;
                    line-height: 1.6;
                }

                .testimonial-card .role {
                    display: block;
                    color: var(--muted);
                    font-size: 0.9rem;
                }

                .testimonial-controls {
                    display: flex;
                    gap: 0.75rem;
                    justify-content: center;
                    margin-top: 1.5rem;
                }

                .testimonial-prev,
                .testimonial-next {
                    background: var(--surface);
                    border: 1px solid var(--border);
                    color: var(--text);
                    border-radius: 50%;
                    width: 2.5rem;
                    height: 2.5rem;
                    font-size: 1.25rem;
                    cursor: pointer;
                }

                /* ===== FAQ ===== */
                .faq-list {
                    max-width: 700px;
                    margin: 0 auto;
                }

                .faq-item {
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 10px;
                    margin-bottom: 0.75rem;
                    overflow: hidden;
                }

                .faq-question {
                    width: 100%;
                    padding: 1.1rem 1.25rem;
                    background: none;
                    border: none;
                    color: var(--text);
                    font-size: 1.05rem;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .toggle-icon {
                    color: var(--accent);
                    font-size: 1.3rem;
                }

                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.4s ease;
                    padding: 0 1.25rem;
                }

                .faq-item.open .faq-answer {
                    max-height: 400px;
                    padding: 0 1.25rem 1.1rem;
                }

                .faq-answer p {
                    color: var(--muted);
                    line-height: 1.6;
                    margin: 0;
                }

                /* ===== Contact ===== */
                .contact-form {
                    max-width: 560px;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 1.1rem;
                }

                .form-group {
                    display: flex;
                    flex-direction: column;
                    gap: 0.35rem;
                }

                .form-group label {
                    font-weight: 600;
                    font-size: 0.95rem;
                }

                .form-group input,
                .form-group select,
                .form-group textarea {
                    background: var(--surface);
                    border: 1px solid var(--border);
                    border-radius: 8px;
                    padding: 0.7rem 0.9rem;
                    color: var(--text);
                    font: inherit;
                }

                .form-group.error input,
                .form-group.error select,
                .form-group.error textarea {
                    border-color: #ef4444;
                }

                .error-message {
                    color: #ef4444;
                    font-size: 0.85rem;
                    min-height: 1em;
                }

                .submit-btn {
                    background: var(--accent);
                    color: #fff;
                    border: none;
                    border-radius: 8px;
                    padding: 0.85rem;
                    font-size: 1rem;
                    font-weight: 600;
                    cursor: pointer;
                }

                .form-status {
                    text-align: center;
                    font-weight: 600;
                    margin: 0;
                }

                /* ===== Footer & back-to-top ===== */
                .site-footer {
                    border-top: 1px solid var(--border);
                    text-align: center;
                    padding: 2rem 1.5rem;
                    color: var(--muted);
                }

                .back-to-top {
                    position: fixed;
                    right: 1.5rem;
                    bottom: 1.5rem;
                    width: 2.75rem;
                    height: 2.75rem;
                    border-radius: 50%;
                    border: none;
                    background: var(--accent);
                    color: #fff;
                    font-size: 1.25rem;
                    cursor: pointer;
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity 0.2s ease;
                }

                .back-to-top.show {
                    opacity: 1;
                    pointer-events: auto;
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }

                    .nav {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        background: var(--surface);
                        border-bottom: 1px solid var(--border);
                        padding: 1rem 1.5rem;
                    }

                    .nav.open {
                        display: flex;
                    }

                    .hero h1 {
                        font-size: 2.2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
