use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use log::info;
use wasm_bindgen_futures::spawn_local;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::icons::WhatsAppIcon;
use crate::config;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Role {
    Bot,
    User,
    Cta,
}

pub struct ScriptedMessage {
    pub role: Role,
    pub text: &'static str,
}

/// The pre-recorded conversation the widget plays back. Fixed at compile
/// time; the only runtime state is how much of it has been revealed.
pub const SCRIPT: [ScriptedMessage; 6] = [
    ScriptedMessage {
        role: Role::Bot,
        text: "Hola 👋 gracias por escribir a BarberPro.",
    },
    ScriptedMessage {
        role: Role::Bot,
        text: "Ayudamos a barberías a responder mensajes, agendar citas y confirmar clientes de forma automática por WhatsApp, las 24 horas.",
    },
    ScriptedMessage {
        role: Role::Bot,
        text: "Mientras tú trabajas, el sistema atiende por ti.",
    },
    ScriptedMessage {
        role: Role::Bot,
        text: "¿Quieres ver cómo funcionaría en tu negocio?",
    },
    ScriptedMessage {
        role: Role::User,
        text: "Sí, quiero ver una demostración.",
    },
    ScriptedMessage {
        role: Role::Cta,
        text: "¡Excelente! Haz clic abajo 👇",
    },
];

/// Simulated composition time before a bot bubble appears.
const TYPING_MS: u32 = 800;
/// Read pause after a bot bubble, before the next step starts.
const READ_PAUSE_MS: u32 = 600;
/// Delay before the scripted visitor reply appears.
const USER_REPLY_MS: u32 = 1_200;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum PlaybackStep {
    TypingOn,
    TypingOff,
    Wait(u32),
    Reveal(usize),
}

/// Flattens the script into the ordered step list the playback task walks.
/// Pure so the sequencing rules stay testable off the event loop.
fn playback_plan() -> Vec<PlaybackStep> {
    let mut plan = Vec::new();
    for (idx, message) in SCRIPT.iter().enumerate() {
        match message.role {
            Role::Bot | Role::Cta => {
                plan.push(PlaybackStep::TypingOn);
                plan.push(PlaybackStep::Wait(TYPING_MS));
                plan.push(PlaybackStep::TypingOff);
                plan.push(PlaybackStep::Reveal(idx));
                plan.push(PlaybackStep::Wait(READ_PAUSE_MS));
            }
            Role::User => {
                plan.push(PlaybackStep::Wait(USER_REPLY_MS));
                plan.push(PlaybackStep::Reveal(idx));
            }
        }
    }
    plan
}

/// Drives the plan on the browser event loop. The cancel flag is checked
/// before every message send so unmounting the widget halts pending timers
/// instead of letting them mutate a dead component's state.
fn run_script(link: Scope<ChatDemoWidget>, cancelled: Rc<Cell<bool>>) {
    spawn_local(async move {
        for step in playback_plan() {
            if cancelled.get() {
                return;
            }
            match step {
                PlaybackStep::Wait(ms) => TimeoutFuture::new(ms).await,
                PlaybackStep::TypingOn => link.send_message(ChatDemoMsg::SetTyping(true)),
                PlaybackStep::TypingOff => link.send_message(ChatDemoMsg::SetTyping(false)),
                PlaybackStep::Reveal(_) => link.send_message(ChatDemoMsg::Reveal),
            }
        }
        if !cancelled.get() {
            link.send_message(ChatDemoMsg::Finished);
        }
    });
}

pub enum ChatDemoMsg {
    Toggle,
    SetTyping(bool),
    Reveal,
    Finished,
}

/// Floating chat widget that simulates a WhatsApp conversation with the bot.
/// The script runs once per mount, on first open; closing and reopening
/// keeps the transcript instead of replaying.
pub struct ChatDemoWidget {
    open: bool,
    started: bool,
    /// How many script entries are visible. The transcript is always
    /// `SCRIPT[..revealed]`, so messages can never appear out of order.
    revealed: usize,
    typing: bool,
    cancelled: Rc<Cell<bool>>,
    transcript_ref: NodeRef,
}

impl Component for ChatDemoWidget {
    type Message = ChatDemoMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            open: false,
            started: false,
            revealed: 0,
            typing: false,
            cancelled: Rc::new(Cell::new(false)),
            transcript_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ChatDemoMsg::Toggle => {
                self.open = !self.open;
                if self.open && !self.started {
                    self.started = true;
                    info!("Starting chat demo script");
                    run_script(ctx.link().clone(), self.cancelled.clone());
                }
                true
            }
            ChatDemoMsg::SetTyping(typing) => {
                self.typing = typing;
                true
            }
            ChatDemoMsg::Reveal => {
                if self.revealed < SCRIPT.len() {
                    self.revealed += 1;
                }
                true
            }
            ChatDemoMsg::Finished => {
                self.typing = false;
                info!("Chat demo script finished");
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        // Keep the newest bubble (or the typing dots) in view.
        if let Some(body) = self.transcript_ref.cast::<web_sys::Element>() {
            body.set_scroll_top(body.scroll_height());
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.cancelled.set(true);
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let toggle = ctx.link().callback(|_| ChatDemoMsg::Toggle);

        html! {
            <div class="chat-demo">
                <div class={classes!("chat-window", self.open.then(|| "open"))}>
                    <div class="chat-header">
                        <div class="chat-header-identity">
                            <span class="chat-avatar">{"🤖"}</span>
                            <div>
                                <p class="chat-title">{"Barber Pro Demo"}</p>
                                <p class="chat-status">{"En línea"}</p>
                            </div>
                        </div>
                        <button class="chat-close" onclick={toggle.clone()}>{"✕"}</button>
                    </div>
                    <div class="chat-body" ref={self.transcript_ref.clone()}>
                        { for SCRIPT[..self.revealed].iter().map(render_message) }
                        if self.typing {
                            <div class="chat-row bot">
                                <div class="typing-indicator">
                                    <span>{"."}</span><span>{"."}</span><span>{"."}</span>
                                </div>
                            </div>
                        }
                    </div>
                </div>
                <button
                    class={classes!("chat-toggle", self.open.then(|| "open"))}
                    onclick={toggle}
                    aria-label="Probar Demo Chat"
                >
                    { if self.open { "✕" } else { "💬" } }
                    if !self.open {
                        <span class="chat-toggle-tooltip">{"Probar Chat 🤖"}</span>
                    }
                </button>
            </div>
        }
    }
}

fn render_message(message: &ScriptedMessage) -> Html {
    match message.role {
        Role::Cta => html! {
            <div class="chat-cta">
                <p>{message.text}</p>
                <a
                    href={config::whatsapp_link(config::WIDGET_CTA_MESSAGE)}
                    target="_blank"
                    rel="noopener noreferrer"
                    class="chat-cta-button"
                >
                    <WhatsAppIcon />
                    {"Contratar Bot ›"}
                </a>
            </div>
        },
        Role::Bot => html! {
            <div class="chat-row bot">
                <div class="chat-bubble bot">{message.text}</div>
            </div>
        },
        Role::User => html! {
            <div class="chat-row user">
                <div class="chat-bubble user">{message.text}</div>
            </div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_is_the_fixed_six_message_conversation() {
        let roles: Vec<Role> = SCRIPT.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![Role::Bot, Role::Bot, Role::Bot, Role::Bot, Role::User, Role::Cta]
        );
    }

    #[test]
    fn cta_entry_is_unique_and_terminal() {
        let cta_positions: Vec<usize> = SCRIPT
            .iter()
            .enumerate()
            .filter(|(_, m)| m.role == Role::Cta)
            .map(|(idx, _)| idx)
            .collect();
        assert_eq!(cta_positions, vec![SCRIPT.len() - 1]);
    }

    #[test]
    fn plan_reveals_every_entry_in_script_order() {
        let reveals: Vec<usize> = playback_plan()
            .into_iter()
            .filter_map(|step| match step {
                PlaybackStep::Reveal(idx) => Some(idx),
                _ => None,
            })
            .collect();
        assert_eq!(reveals, (0..SCRIPT.len()).collect::<Vec<_>>());
    }

    #[test]
    fn typing_wraps_bot_entries_and_ends_false() {
        // Walk the plan like the component would, tracking the two pieces
        // of runtime state.
        let mut typing = false;
        let mut revealed = 0usize;
        for step in playback_plan() {
            match step {
                PlaybackStep::TypingOn => {
                    assert!(!typing, "typing indicator turned on twice");
                    typing = true;
                }
                PlaybackStep::TypingOff => {
                    assert!(typing, "typing indicator turned off while off");
                    typing = false;
                }
                PlaybackStep::Reveal(idx) => {
                    assert!(
                        !typing,
                        "bubble appended while the typing indicator was still up"
                    );
                    assert_eq!(idx, revealed, "reveal skipped ahead of the prefix");
                    revealed += 1;
                }
                PlaybackStep::Wait(_) => {}
            }
        }
        assert!(!typing);
        assert_eq!(revealed, SCRIPT.len());
    }

    #[test]
    fn bot_entries_pause_for_composition_and_reading() {
        let plan = playback_plan();
        for (pos, step) in plan.iter().enumerate() {
            if let PlaybackStep::Reveal(idx) = step {
                match SCRIPT[*idx].role {
                    Role::Bot | Role::Cta => {
                        assert_eq!(plan[pos - 3], PlaybackStep::TypingOn);
                        assert_eq!(plan[pos - 2], PlaybackStep::Wait(TYPING_MS));
                        assert_eq!(plan[pos - 1], PlaybackStep::TypingOff);
                        assert_eq!(plan.get(pos + 1), Some(&PlaybackStep::Wait(READ_PAUSE_MS)));
                    }
                    Role::User => {
                        assert_eq!(plan[pos - 1], PlaybackStep::Wait(USER_REPLY_MS));
                    }
                }
            }
        }
    }
}
