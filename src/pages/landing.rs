use yew::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::components::icons::{ScissorsIcon, WhatsAppIcon};
use crate::config;

#[derive(Properties, PartialEq)]
struct ProblemCardProps {
    icon: String,
    title: String,
    desc: String,
}

#[function_component(ProblemCard)]
fn problem_card(props: &ProblemCardProps) -> Html {
    html! {
        <div class="problem-card">
            <div class="problem-icon">{&props.icon}</div>
            <h3>{&props.title}</h3>
            <p>{&props.desc}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FeatureRowProps {
    title: String,
    #[prop_or_default]
    desc: Option<String>,
}

#[function_component(FeatureRow)]
fn feature_row(props: &FeatureRowProps) -> Html {
    html! {
        <div class="feature-row">
            <span class="feature-check">{"✓"}</span>
            <div class="feature-text">
                <span class="feature-title">{&props.title}</span>
                if let Some(desc) = &props.desc {
                    <span class="feature-desc">{desc}</span>
                }
            </div>
        </div>
    }
}

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
            <style>
                {r#"
                    .landing-page {
                        font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
                        color: #0f172a;
                        background: #f8fafc;
                        overflow-x: hidden;
                    }
                    .container {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }

                    /* One-shot scroll reveal */
                    .fade-in {
                        opacity: 0;
                        transform: translateY(3rem);
                        transition: opacity 1s ease-out, transform 1s ease-out;
                    }
                    .fade-in.visible {
                        opacity: 1;
                        transform: translateY(0);
                    }

                    /* Navbar */
                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 50;
                        padding: 1.5rem 0;
                        background: transparent;
                        transition: all 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(0, 0, 0, 0.8);
                        backdrop-filter: blur(12px);
                        padding: 0.75rem 0;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: #fff;
                        font-weight: 900;
                        font-size: 1.4rem;
                        letter-spacing: -0.05em;
                        text-decoration: none;
                    }
                    .nav-logo-badge {
                        background: linear-gradient(to top right, #fbbf24, #d97706);
                        color: #000;
                        padding: 0.45rem;
                        border-radius: 0.5rem;
                        display: flex;
                    }
                    .nav-logo-badge svg {
                        width: 1.1rem;
                        height: 1.1rem;
                    }
                    .nav-logo .accent {
                        background: linear-gradient(to right, #fbbf24, #fde68a);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .nav-links {
                        display: none;
                        gap: 2rem;
                        font-size: 0.9rem;
                        font-weight: 500;
                    }
                    .nav-links a {
                        color: rgba(255, 255, 255, 0.8);
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .nav-links a:hover {
                        color: #fbbf24;
                    }
                    .whatsapp-button {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        background: #25D366;
                        color: #fff;
                        font-weight: 700;
                        border-radius: 9999px;
                        padding: 0.65rem 1.25rem;
                        font-size: 0.9rem;
                        text-decoration: none;
                        box-shadow: 0 10px 20px rgba(0, 0, 0, 0.2);
                        transition: background 0.2s, transform 0.2s;
                    }
                    .whatsapp-button:hover {
                        background: #20bd5a;
                    }
                    .whatsapp-button svg {
                        width: 1.25rem;
                        height: 1.25rem;
                    }

                    /* Hero */
                    .hero {
                        position: relative;
                        min-height: 90vh;
                        background: #000;
                        display: flex;
                        align-items: center;
                        overflow: hidden;
                        padding-top: 5rem;
                    }
                    .hero-glow-left, .hero-glow-right {
                        position: absolute;
                        width: 50%;
                        height: 50%;
                        border-radius: 50%;
                        filter: blur(120px);
                    }
                    .hero-glow-left {
                        top: -20%;
                        left: -10%;
                        background: rgba(245, 158, 11, 0.2);
                    }
                    .hero-glow-right {
                        bottom: -20%;
                        right: -10%;
                        background: rgba(37, 99, 235, 0.1);
                    }
                    .hero-grid {
                        position: relative;
                        z-index: 10;
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 4rem;
                        align-items: center;
                        width: 100%;
                    }
                    .hero-copy {
                        text-align: center;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                    }
                    .hero-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        background: rgba(245, 158, 11, 0.1);
                        border: 1px solid rgba(245, 158, 11, 0.2);
                        color: #fbbf24;
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        margin-bottom: 1.5rem;
                    }
                    .hero-badge .pulse-dot {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 50%;
                        background: #f59e0b;
                        animation: pulse 1.5s ease-in-out infinite;
                    }
                    @keyframes pulse {
                        0%, 100% { box-shadow: 0 0 0 0 rgba(251, 191, 36, 0.7); }
                        50% { box-shadow: 0 0 0 6px rgba(251, 191, 36, 0); }
                    }
                    .hero h1 {
                        font-size: 3rem;
                        font-weight: 900;
                        color: #fff;
                        line-height: 1.1;
                        letter-spacing: -0.03em;
                        margin: 0 0 1.5rem;
                    }
                    .hero h1 .accent {
                        background: linear-gradient(to right, #fbbf24, #fde68a, #f59e0b);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .hero-subtitle {
                        color: #94a3b8;
                        font-size: 1.15rem;
                        line-height: 1.6;
                        max-width: 32rem;
                        margin: 0 0 2rem;
                    }
                    .hero-cta {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        background: #f59e0b;
                        color: #000;
                        font-size: 1.1rem;
                        font-weight: 700;
                        padding: 1rem 2rem;
                        border-radius: 0.75rem;
                        text-decoration: none;
                        box-shadow: 0 0 30px rgba(245, 158, 11, 0.3);
                        transition: background 0.2s, transform 0.2s;
                    }
                    .hero-cta:hover {
                        background: #fbbf24;
                        transform: scale(1.05);
                    }
                    .hero-proof {
                        margin-top: 2.5rem;
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        color: #64748b;
                        font-size: 0.9rem;
                    }
                    .hero-proof .avatars {
                        display: flex;
                    }
                    .hero-proof .avatars img {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        border: 2px solid #000;
                        margin-left: -0.75rem;
                    }
                    .hero-proof .avatars img:first-child {
                        margin-left: 0;
                    }

                    /* Hero phone mockup */
                    .phone-mockup {
                        display: none;
                    }
                    .phone-frame {
                        background: linear-gradient(to bottom, #1e293b, #0f172a);
                        border-radius: 2.5rem;
                        padding: 1rem;
                        border: 1px solid #334155;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                        max-width: 24rem;
                        margin: 0 auto;
                        transform: rotate(-3deg);
                        transition: transform 0.7s ease;
                    }
                    .phone-frame:hover {
                        transform: rotate(0deg);
                    }
                    .phone-screen {
                        background: #000;
                        border-radius: 2rem;
                        border: 1px solid #1e293b;
                        height: 600px;
                        position: relative;
                        overflow: hidden;
                    }
                    .phone-chat-header {
                        position: absolute;
                        top: 0;
                        width: 100%;
                        height: 5rem;
                        background: rgba(15, 23, 42, 0.9);
                        backdrop-filter: blur(4px);
                        z-index: 20;
                        display: flex;
                        align-items: center;
                        padding: 0 1.5rem;
                        border-bottom: 1px solid #1e293b;
                        box-sizing: border-box;
                    }
                    .phone-chat-avatar {
                        width: 2.5rem;
                        height: 2.5rem;
                        background: #f59e0b;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 700;
                        color: #000;
                    }
                    .phone-chat-name {
                        margin-left: 0.75rem;
                    }
                    .phone-chat-name .name {
                        color: #fff;
                        font-weight: 700;
                        font-size: 0.9rem;
                        margin: 0;
                    }
                    .phone-chat-name .status {
                        color: #22c55e;
                        font-size: 0.75rem;
                        margin: 0;
                    }
                    .phone-chat-body {
                        padding: 6rem 1.5rem 1.5rem;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .phone-bubble {
                        padding: 0.75rem;
                        border-radius: 1rem;
                        max-width: 85%;
                        font-size: 0.9rem;
                    }
                    .phone-bubble.in {
                        background: #1e293b;
                        color: #e2e8f0;
                        border-top-left-radius: 0;
                    }
                    .phone-bubble.out {
                        background: #f59e0b;
                        color: #000;
                        font-weight: 500;
                        border-top-right-radius: 0;
                        align-self: flex-end;
                    }
                    .phone-fade {
                        position: absolute;
                        bottom: 0;
                        width: 100%;
                        height: 8rem;
                        background: linear-gradient(to top, #000, transparent);
                        z-index: 10;
                    }

                    /* Sections */
                    section {
                        padding: 6rem 0;
                    }
                    .section-heading {
                        text-align: center;
                        max-width: 42rem;
                        margin: 0 auto 4rem;
                    }
                    .section-heading h2 {
                        font-size: 2.5rem;
                        font-weight: 900;
                        letter-spacing: -0.03em;
                        margin: 0 0 1rem;
                    }
                    .section-kicker {
                        display: block;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        font-size: 0.85rem;
                        margin-bottom: 1rem;
                    }

                    /* Problem */
                    .problem-section {
                        background: #fff;
                    }
                    .problem-section h2 .accent {
                        color: #dc2626;
                    }
                    .problem-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.5rem;
                    }
                    .problem-card {
                        background: #f8fafc;
                        padding: 2rem;
                        border-radius: 1rem;
                        border: 1px solid #f1f5f9;
                        transition: all 0.3s ease;
                        height: 100%;
                        box-sizing: border-box;
                    }
                    .problem-card:hover {
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                        border-color: #fde68a;
                        transform: translateY(-4px);
                    }
                    .problem-icon {
                        width: 3.5rem;
                        height: 3.5rem;
                        background: #fff;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.5rem;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                        margin-bottom: 1.5rem;
                    }
                    .problem-card h3 {
                        font-size: 1.2rem;
                        margin: 0 0 0.75rem;
                    }
                    .problem-card p {
                        color: #475569;
                        font-size: 0.9rem;
                        line-height: 1.6;
                        margin: 0;
                    }

                    /* Solution */
                    .solution-section {
                        background: #0f172a;
                        color: #fff;
                        position: relative;
                        overflow: hidden;
                    }
                    .solution-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 4rem;
                        align-items: center;
                        position: relative;
                        z-index: 10;
                    }
                    .solution-section .section-kicker {
                        color: #fbbf24;
                    }
                    .solution-section h2 {
                        font-size: 2.5rem;
                        font-weight: 900;
                        line-height: 1.2;
                        margin: 0 0 2rem;
                    }
                    .solution-section h2 .accent {
                        color: #f59e0b;
                    }
                    .solution-copy > p {
                        color: #cbd5e1;
                        font-size: 1.1rem;
                        line-height: 1.7;
                        margin: 0 0 2.5rem;
                    }
                    .feature-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.25rem;
                    }
                    .feature-row {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        background: rgba(30, 41, 59, 0.5);
                        padding: 1rem;
                        border-radius: 0.75rem;
                        border: 1px solid #334155;
                        transition: border-color 0.2s;
                    }
                    .feature-row:hover {
                        border-color: rgba(245, 158, 11, 0.5);
                    }
                    .feature-check {
                        background: rgba(245, 158, 11, 0.1);
                        color: #f59e0b;
                        font-weight: 700;
                        border-radius: 0.25rem;
                        padding: 0.25rem 0.5rem;
                        flex-shrink: 0;
                    }
                    .feature-text {
                        display: flex;
                        flex-direction: column;
                    }
                    .feature-title {
                        font-weight: 500;
                        color: #e2e8f0;
                        font-size: 0.95rem;
                    }
                    .feature-desc {
                        color: #94a3b8;
                        font-size: 0.75rem;
                    }
                    .assistant-card-wrap {
                        background: linear-gradient(to bottom right, rgba(245, 158, 11, 0.2), transparent);
                        padding: 0.25rem;
                        border-radius: 1.5rem;
                        max-width: 28rem;
                        margin: 0 auto;
                        width: 100%;
                        box-sizing: border-box;
                    }
                    .assistant-card {
                        background: #1e293b;
                        border-radius: 1.5rem;
                        padding: 2rem;
                        border: 1px solid #334155;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.4);
                    }
                    .assistant-header {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        border-bottom: 1px solid #334155;
                        padding-bottom: 1.5rem;
                        margin-bottom: 2rem;
                    }
                    .assistant-header .assistant-icon {
                        background: rgba(34, 197, 94, 0.2);
                        color: #22c55e;
                        padding: 1rem;
                        border-radius: 50%;
                        font-size: 1.5rem;
                    }
                    .assistant-header h4 {
                        font-size: 1.25rem;
                        margin: 0;
                    }
                    .assistant-header p {
                        color: #94a3b8;
                        font-size: 0.85rem;
                        margin: 0;
                    }
                    .assistant-chat {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                        font-size: 0.95rem;
                    }
                    .assistant-bubble {
                        padding: 1rem;
                        width: 85%;
                        box-sizing: border-box;
                    }
                    .assistant-bubble.in {
                        background: rgba(51, 65, 85, 0.5);
                        border-radius: 0 1rem 1rem 1rem;
                    }
                    .assistant-bubble.out {
                        background: rgba(22, 163, 74, 0.2);
                        color: #dcfce7;
                        border: 1px solid rgba(34, 197, 94, 0.3);
                        border-radius: 1rem 0 1rem 1rem;
                        align-self: flex-end;
                    }

                    /* Video demo */
                    .video-section {
                        background: #f8fafc;
                        text-align: center;
                    }
                    .video-section .section-kicker {
                        color: #2563eb;
                    }
                    .video-section h2 {
                        font-size: 2.5rem;
                        font-weight: 900;
                        margin: 0 0 3rem;
                    }
                    .video-frame {
                        position: relative;
                        width: 100%;
                        max-width: 56rem;
                        margin: 0 auto 2rem;
                        aspect-ratio: 16 / 9;
                        background: #000;
                        border-radius: 1rem;
                        overflow: hidden;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                        border: 4px solid #fff;
                    }
                    .video-frame video {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .video-play-overlay {
                        pointer-events: none;
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(0, 0, 0, 0.2);
                    }
                    .video-play-overlay .play-circle {
                        width: 6rem;
                        height: 6rem;
                        background: rgba(255, 255, 255, 0.9);
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 2rem;
                        color: #0f172a;
                        backdrop-filter: blur(4px);
                        animation: pulse 2s ease-in-out infinite;
                    }
                    .video-note {
                        color: #64748b;
                        font-size: 0.85rem;
                        max-width: 36rem;
                        margin: 0 auto;
                    }

                    /* CTA */
                    .cta-section {
                        background: #f59e0b;
                        position: relative;
                    }
                    .cta-card {
                        background: #fff;
                        border-radius: 1.5rem;
                        padding: 3rem 2rem;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                        max-width: 56rem;
                        margin: 0 auto;
                        text-align: center;
                        transform: rotate(-1deg);
                        transition: transform 0.5s ease;
                    }
                    .cta-card:hover {
                        transform: rotate(0deg);
                    }
                    .cta-pill {
                        background: #000;
                        color: #fff;
                        padding: 0.25rem 1rem;
                        border-radius: 9999px;
                        font-size: 0.75rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.15em;
                        display: inline-block;
                        margin-bottom: 1.5rem;
                    }
                    .cta-card h2 {
                        font-size: 2.75rem;
                        font-weight: 900;
                        letter-spacing: -0.03em;
                        margin: 0 0 2rem;
                    }
                    .cta-card p {
                        color: #475569;
                        font-size: 1.25rem;
                        line-height: 1.6;
                        max-width: 36rem;
                        margin: 0 auto 2.5rem;
                    }
                    .cta-card .whatsapp-button {
                        font-size: 1.25rem;
                        padding: 1.25rem 2.5rem;
                        border-radius: 0.75rem;
                        box-shadow: 0 20px 25px rgba(22, 163, 74, 0.2);
                    }
                    .cta-card .whatsapp-button svg {
                        width: 2rem;
                        height: 2rem;
                    }

                    /* Footer */
                    .footer {
                        background: #020617;
                        color: #94a3b8;
                        padding: 3rem 0;
                        border-top: 1px solid #0f172a;
                    }
                    .footer-content {
                        display: flex;
                        flex-direction: column;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .footer-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: #fff;
                        font-weight: 700;
                        font-size: 1.25rem;
                    }
                    .footer-brand svg {
                        width: 1.25rem;
                        height: 1.25rem;
                        color: #f59e0b;
                    }
                    .footer-note {
                        font-size: 0.9rem;
                    }

                    /* Floating WhatsApp button */
                    .floating-whatsapp {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        background: #25D366;
                        color: #fff;
                        padding: 1rem;
                        border-radius: 50%;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                        z-index: 40;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        transition: transform 0.2s, background 0.2s;
                        animation: float 3s ease-in-out infinite;
                    }
                    .floating-whatsapp:hover {
                        background: #20bd5a;
                        transform: scale(1.1);
                    }
                    .floating-whatsapp svg {
                        width: 2rem;
                        height: 2rem;
                    }
                    @keyframes float {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-6px); }
                    }

                    /* Chat demo widget */
                    .chat-demo {
                        position: fixed;
                        bottom: 6rem;
                        right: 1.5rem;
                        z-index: 50;
                        display: flex;
                        flex-direction: column;
                        align-items: flex-end;
                    }
                    .chat-window {
                        margin-bottom: 1rem;
                        width: 18rem;
                        background: #fff;
                        border-radius: 1rem;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                        overflow: hidden;
                        border: 1px solid #e2e8f0;
                        transform: scale(0);
                        opacity: 0;
                        pointer-events: none;
                        transform-origin: bottom right;
                        transition: all 0.3s ease;
                    }
                    .chat-window.open {
                        transform: scale(1);
                        opacity: 1;
                        pointer-events: auto;
                    }
                    .chat-header {
                        background: #0f172a;
                        padding: 1rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        color: #fff;
                    }
                    .chat-header-identity {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .chat-avatar {
                        background: #22c55e;
                        border-radius: 50%;
                        width: 2rem;
                        height: 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1rem;
                    }
                    .chat-title {
                        font-weight: 700;
                        font-size: 0.85rem;
                        margin: 0;
                    }
                    .chat-status {
                        font-size: 0.75rem;
                        color: #94a3b8;
                        margin: 0;
                    }
                    .chat-close {
                        background: none;
                        border: none;
                        color: #fff;
                        cursor: pointer;
                        padding: 0.25rem;
                        border-radius: 0.25rem;
                    }
                    .chat-close:hover {
                        background: #1e293b;
                    }
                    .chat-body {
                        height: 16rem;
                        overflow-y: auto;
                        padding: 1rem;
                        background: #f8fafc;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                    }
                    .chat-row {
                        display: flex;
                    }
                    .chat-row.bot {
                        justify-content: flex-start;
                    }
                    .chat-row.user {
                        justify-content: flex-end;
                    }
                    .chat-bubble {
                        max-width: 85%;
                        padding: 0.75rem;
                        font-size: 0.85rem;
                        border-radius: 1rem;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    }
                    .chat-bubble.bot {
                        background: #fff;
                        color: #334155;
                        border: 1px solid #f1f5f9;
                        border-top-left-radius: 0;
                    }
                    .chat-bubble.user {
                        background: #f59e0b;
                        color: #000;
                        border-top-right-radius: 0;
                    }
                    .chat-cta {
                        width: 100%;
                        text-align: center;
                        margin-top: 0.5rem;
                    }
                    .chat-cta p {
                        font-size: 0.85rem;
                        color: #64748b;
                        margin: 0 0 0.5rem;
                    }
                    .chat-cta-button {
                        background: #25D366;
                        color: #fff;
                        font-size: 0.85rem;
                        font-weight: 700;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        text-decoration: none;
                        display: inline-flex;
                        align-items: center;
                        gap: 0.25rem;
                        transition: background 0.2s;
                    }
                    .chat-cta-button:hover {
                        background: #20bd5a;
                    }
                    .chat-cta-button svg {
                        width: 1rem;
                        height: 1rem;
                    }
                    .typing-indicator {
                        background: #fff;
                        color: #64748b;
                        padding: 0.75rem 1rem;
                        border-radius: 1rem;
                        border-top-left-radius: 0;
                        border: 1px solid #f1f5f9;
                        font-size: 0.75rem;
                        font-style: italic;
                        display: flex;
                        gap: 0.25rem;
                    }
                    .typing-indicator span {
                        animation: bounce 1s infinite;
                    }
                    .typing-indicator span:nth-child(2) {
                        animation-delay: 0.1s;
                    }
                    .typing-indicator span:nth-child(3) {
                        animation-delay: 0.2s;
                    }
                    @keyframes bounce {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-4px); }
                    }
                    .chat-toggle {
                        background: #f59e0b;
                        color: #fff;
                        border: none;
                        padding: 1rem;
                        border-radius: 50%;
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.25);
                        cursor: pointer;
                        font-size: 1.25rem;
                        position: relative;
                        transition: transform 0.2s, background 0.2s;
                    }
                    .chat-toggle:hover {
                        background: #fbbf24;
                        transform: scale(1.05);
                    }
                    .chat-toggle.open {
                        background: #334155;
                    }
                    .chat-toggle-tooltip {
                        position: absolute;
                        right: 100%;
                        top: 50%;
                        transform: translateY(-50%);
                        margin-right: 0.75rem;
                        background: #fff;
                        color: #0f172a;
                        padding: 0.25rem 0.75rem;
                        border-radius: 0.5rem;
                        font-size: 0.85rem;
                        font-weight: 700;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                        white-space: nowrap;
                        opacity: 0;
                        pointer-events: none;
                        transition: opacity 0.2s;
                    }
                    .chat-toggle:hover .chat-toggle-tooltip {
                        opacity: 1;
                    }

                    @media (min-width: 768px) {
                        .nav-links {
                            display: flex;
                        }
                        .problem-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                        .feature-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                        .footer-content {
                            flex-direction: row;
                        }
                    }
                    @media (min-width: 1024px) {
                        .hero h1 {
                            font-size: 4.5rem;
                        }
                        .hero-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                        .hero-copy {
                            text-align: left;
                            align-items: flex-start;
                        }
                        .problem-grid {
                            grid-template-columns: repeat(4, 1fr);
                        }
                        .solution-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                        .phone-mockup {
                            display: block;
                        }
                        .chat-window {
                            width: 20rem;
                        }
                    }
                "#}
            </style>

            <header class="hero">
                <div class="hero-glow-left"></div>
                <div class="hero-glow-right"></div>
                <div class="container hero-grid">
                    <div class="hero-copy">
                        <FadeIn>
                            <div class="hero-badge">
                                <span class="pulse-dot"></span>
                                {"Tecnología para Barberos"}
                            </div>
                        </FadeIn>
                        <FadeIn delay={100}>
                            <h1>
                                {"Tu barbería "}<br />
                                <span class="accent">{"abierta 24/7"}</span>
                            </h1>
                        </FadeIn>
                        <FadeIn delay={200}>
                            <p class="hero-subtitle">
                                {"Deja de perder clientes por no responder. Automatizamos tu WhatsApp para agendar citas mientras tú te enfocas en cortar."}
                            </p>
                        </FadeIn>
                        <FadeIn delay={300}>
                            <a
                                href={config::whatsapp_link(config::HERO_CTA_MESSAGE)}
                                target="_blank"
                                rel="noopener noreferrer"
                                class="hero-cta"
                            >
                                {"Ver Demo en Vivo ›"}
                            </a>
                        </FadeIn>
                        <FadeIn delay={400}>
                            <div class="hero-proof">
                                <div class="avatars">
                                    <img src="https://i.pravatar.cc/100?img=11" alt="Cliente" />
                                    <img src="https://i.pravatar.cc/100?img=12" alt="Cliente" />
                                    <img src="https://i.pravatar.cc/100?img=13" alt="Cliente" />
                                </div>
                                <p>{"Usado por +50 barberías"}</p>
                            </div>
                        </FadeIn>
                    </div>

                    <div class="phone-mockup">
                        <div class="phone-frame">
                            <div class="phone-screen">
                                <div class="phone-chat-header">
                                    <div class="phone-chat-avatar">{"B"}</div>
                                    <div class="phone-chat-name">
                                        <p class="name">{"Barber Pro"}</p>
                                        <p class="status">{"En línea"}</p>
                                    </div>
                                </div>
                                <div class="phone-chat-body">
                                    <div class="phone-bubble in">
                                        {"👋 ¡Hola! Bienvenido a Barbería El Patrón. ¿En qué te puedo ayudar hoy?"}
                                    </div>
                                    <div class="phone-bubble out">
                                        {"Quiero agendar un corte para mañana."}
                                    </div>
                                    <div class="phone-bubble in">
                                        {"¡Claro! Tengo estos horarios disponibles:"}
                                        <br />{"- 10:00 AM"}
                                        <br />{"- 03:30 PM"}
                                        <br />{"¿Cuál prefieres? 💈"}
                                    </div>
                                </div>
                                <div class="phone-fade"></div>
                            </div>
                        </div>
                    </div>
                </div>
            </header>

            <section id="problema" class="problem-section">
                <div class="container">
                    <div class="section-heading">
                        <FadeIn>
                            <h2>
                                {"El problema de "}<br />
                                <span class="accent">{"no estar disponible"}</span>
                            </h2>
                        </FadeIn>
                    </div>
                    <div class="problem-grid">
                        <FadeIn>
                            <ProblemCard
                                icon="📱"
                                title="Interrupciones"
                                desc="Dejas de cortar para responder mensajes o pierdes la concentración."
                            />
                        </FadeIn>
                        <FadeIn delay={100}>
                            <ProblemCard
                                icon="⏰"
                                title="Tiempo Perdido"
                                desc="Respondes '¿A cómo el corte?' y '¿Dónde están?' 20 veces al día."
                            />
                        </FadeIn>
                        <FadeIn delay={200}>
                            <ProblemCard
                                icon="❌"
                                title="Ausentismo"
                                desc="Pierdes dinero cuando los clientes olvidan su cita por falta de recordatorio."
                            />
                        </FadeIn>
                        <FadeIn delay={300}>
                            <ProblemCard
                                icon="🌙"
                                title="Fugas nocturnas"
                                desc="El cliente que escribe a las 11 PM se va con otro si no respondes ya."
                            />
                        </FadeIn>
                    </div>
                </div>
            </section>

            <section id="solucion" class="solution-section">
                <div class="container solution-grid">
                    <div class="solution-copy">
                        <FadeIn>
                            <span class="section-kicker">{"🟣 La Solución Definitiva"}</span>
                        </FadeIn>
                        <FadeIn delay={100}>
                            <h2>
                                {"Tu WhatsApp trabajando por ti, "}
                                <span class="accent">{"las 24 horas"}</span>
                            </h2>
                        </FadeIn>
                        <FadeIn delay={200}>
                            <p>
                                {"Implementamos un sistema automático en WhatsApp que atiende a tus clientes sin que tengas que estar pendiente del celular."}
                            </p>
                        </FadeIn>
                        <FadeIn delay={300}>
                            <div class="feature-grid">
                                <FeatureRow title="Responde mensajes automáticamente" />
                                <FeatureRow title="Muestra servicios y precios" />
                                <FeatureRow title="Agenda citas sin errores" />
                                <FeatureRow title="Envía recordatorios automáticos" />
                                <FeatureRow title="Reduce cancelaciones" />
                                <FeatureRow title="Funciona en tu propio WhatsApp" />
                            </div>
                        </FadeIn>
                    </div>

                    <FadeIn delay={200}>
                        <div class="assistant-card-wrap">
                            <div class="assistant-card">
                                <div class="assistant-header">
                                    <div class="assistant-icon">{"📞"}</div>
                                    <div>
                                        <h4>{"Asistente Virtual"}</h4>
                                        <p>{"Siempre activo • 24/7"}</p>
                                    </div>
                                </div>
                                <div class="assistant-chat">
                                    <div class="assistant-bubble in">
                                        {"Hola, quiero cortarme el cabello mañana 💈"}
                                    </div>
                                    <div class="assistant-bubble out">
                                        {"¡Claro! Tengo disponible a las 10:00 AM y 4:00 PM. ¿Cuál prefieres? ✅"}
                                    </div>
                                </div>
                            </div>
                        </div>
                    </FadeIn>
                </div>
            </section>

            <section id="video-demo" class="video-section">
                <div class="container">
                    <FadeIn>
                        <span class="section-kicker">{"🎥 Mira cómo funciona"}</span>
                        <h2>{"Experiencia Real en 30 Segundos"}</h2>
                        <div class="video-frame">
                            <video
                                controls={true}
                                playsinline={true}
                                preload="metadata"
                                poster="https://images.unsplash.com/photo-1621605815971-fbc98d665033?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80"
                            >
                                <source
                                    src="https://res.cloudinary.com/djbcgcmma/video/upload/v1770854111/barberia_landing_pague_etppr5.mp4"
                                    type="video/mp4"
                                />
                                {"Tu navegador no soporta el tag de video."}
                            </video>
                            <div class="video-play-overlay">
                                <div class="play-circle">{"▶"}</div>
                            </div>
                        </div>
                        <p class="video-note">
                            {"* Este es un ejemplo de cómo el bot interactúa con tus clientes en tiempo real."}
                        </p>
                    </FadeIn>
                </div>
            </section>

            <section id="demo" class="cta-section">
                <div class="container">
                    <FadeIn>
                        <div class="cta-card">
                            <span class="cta-pill">{"Prueba Gratuita"}</span>
                            <h2>{"¿Listo para modernizar tu negocio?"}</h2>
                            <p>
                                {"No dejes pasar más clientes. Prueba el sistema ahora mismo en tu propio celular."}
                            </p>
                            <a
                                href={config::whatsapp_link(config::DEMO_CTA_MESSAGE)}
                                target="_blank"
                                rel="noopener noreferrer"
                                class="whatsapp-button"
                            >
                                <WhatsAppIcon />
                                {"ABRIR EN WHATSAPP"}
                            </a>
                        </div>
                    </FadeIn>
                </div>
            </section>

            <footer class="footer">
                <div class="container footer-content">
                    <div class="footer-brand">
                        <ScissorsIcon />
                        {"BARBER PRO"}
                    </div>
                    <div class="footer-note">
                        {"© 2024 Hecho para Barberos en Colombia 🇨🇴"}
                    </div>
                </div>
            </footer>
        </div>
    }
}
