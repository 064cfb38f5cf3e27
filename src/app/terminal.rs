use std::sync::{Arc, Mutex};
use std::time::Duration;

use leptos::either::Either;
use leptos::leptos_dom::helpers::{
    set_interval_with_handle, set_timeout_with_handle, IntervalHandle, TimeoutHandle,
};
use leptos::{html, prelude::*};

use super::content::hero_script_blocks;
use crate::sequencer::{Phase, Script, Sequencer, SequencerConfig, Snapshot};

/// Fake terminal that replays the hero script forever.
///
/// The sequencer owns all animation state; this component only schedules its
/// ticks and renders whatever snapshot it last produced. An invalid (empty)
/// script degrades to a static frame with no timers.
#[component]
pub fn TerminalHero() -> impl IntoView {
    match Script::new(hero_script_blocks()) {
        Ok(script) => Either::Left(view! { <TerminalWindow script /> }),
        Err(err) => {
            log::warn!("terminal animation disabled: {err}");
            Either::Right(view! {
                <TerminalFrame loop_count=1u32>
                    <div class="h-[420px] px-5 py-5"></div>
                </TerminalFrame>
            })
        }
    }
}

#[component]
fn TerminalWindow(script: Script) -> impl IntoView {
    let sequencer = Sequencer::new(script, SequencerConfig::default());
    let start_delay = sequencer.config().start_delay;
    let blink_period = sequencer.config().cursor_blink;
    let (snapshot, set_snapshot) = signal(sequencer.snapshot());

    let sequencer = StoredValue::new(Arc::new(Mutex::new(sequencer)));
    let pending_tick = StoredValue::new_local(None::<TimeoutHandle>);
    let blink_handle = StoredValue::new_local(None::<IntervalHandle>);
    let scroll_ref = NodeRef::<html::Div>::new();

    // Client-only: kick off the typing chain and the independent cursor
    // blink. The typing chain reschedules itself one timeout at a time.
    Effect::new(move |started: Option<()>| {
        if started.is_some() {
            return;
        }
        schedule_tick(sequencer, pending_tick, set_snapshot, start_delay);
        match set_interval_with_handle(
            move || blink_cursor(sequencer, set_snapshot),
            blink_period,
        ) {
            Ok(handle) => blink_handle.set_value(Some(handle)),
            Err(err) => log::error!("failed to start cursor blink: {err:?}"),
        }
    });

    // Keep the scrollback pinned to the newest line
    Effect::new(move |_| {
        snapshot.track();
        if let Some(el) = scroll_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    on_cleanup(move || {
        sequencer.with_value(|seq| {
            seq.lock().expect("should be able to lock sequencer").stop();
        });
        if let Some(handle) = pending_tick.get_value() {
            handle.clear();
        }
        pending_tick.set_value(None);
        if let Some(handle) = blink_handle.get_value() {
            handle.clear();
        }
        blink_handle.set_value(None);
    });

    view! {
        <TerminalFrame loop_count=Signal::derive(move || snapshot.get().loop_count)>
            <div
                node_ref=scroll_ref
                class="h-[420px] overflow-y-auto px-5 py-5 text-sm leading-relaxed"
            >
                {move || {
                    let snap = snapshot.get();
                    let phase = snap.phase;
                    let cursor_visible = snap.cursor_visible;
                    let history = snap
                        .history
                        .into_iter()
                        .map(|block| {
                            view! {
                                <CommandBlockView
                                    prompt=block.prompt
                                    command=block.command
                                    output=block.output
                                />
                            }
                        })
                        .collect_view();
                    let command_cursor = phase == Phase::TypingCommand && cursor_visible;
                    let output_cursor = phase == Phase::TypingOutput;
                    let active = snap.active.map(|active| {
                        view! {
                            <CommandBlockView
                                prompt=active.prompt
                                command=active.command
                                output=active.output
                                command_cursor=command_cursor
                                output_cursor=output_cursor
                            />
                        }
                    });
                    (history, active)
                }}
            </div>
        </TerminalFrame>
    }
}

/// Advance the sequencer one step, publish the snapshot, and schedule the
/// next tick. A stopped sequencer (or a disposed scope) ends the chain.
fn run_tick(
    sequencer: StoredValue<Arc<Mutex<Sequencer>>>,
    pending_tick: StoredValue<Option<TimeoutHandle>, LocalStorage>,
    set_snapshot: WriteSignal<Snapshot>,
) {
    let stepped = sequencer
        .try_with_value(|seq| {
            let mut seq = seq.lock().expect("should be able to lock sequencer");
            seq.tick().map(|delay| (seq.snapshot(), delay))
        })
        .flatten();
    let Some((snapshot, delay)) = stepped else {
        return;
    };
    set_snapshot.set(snapshot);
    schedule_tick(sequencer, pending_tick, set_snapshot, delay);
}

fn schedule_tick(
    sequencer: StoredValue<Arc<Mutex<Sequencer>>>,
    pending_tick: StoredValue<Option<TimeoutHandle>, LocalStorage>,
    set_snapshot: WriteSignal<Snapshot>,
    delay: Duration,
) {
    match set_timeout_with_handle(
        move || run_tick(sequencer, pending_tick, set_snapshot),
        delay,
    ) {
        Ok(handle) => pending_tick.set_value(Some(handle)),
        Err(err) => log::error!("failed to schedule terminal tick: {err:?}"),
    }
}

fn blink_cursor(sequencer: StoredValue<Arc<Mutex<Sequencer>>>, set_snapshot: WriteSignal<Snapshot>) {
    let snapshot = sequencer.try_with_value(|seq| {
        let mut seq = seq.lock().expect("should be able to lock sequencer");
        seq.toggle_cursor();
        seq.snapshot()
    });
    if let Some(snapshot) = snapshot {
        set_snapshot.set(snapshot);
    }
}

/// Terminal chrome: title bar with traffic lights and the loop counter,
/// scroll body, and the section-jump actions.
#[component]
fn TerminalFrame(#[prop(into)] loop_count: Signal<u32>, children: Children) -> impl IntoView {
    view! {
        <div class="w-full font-mono rounded-lg overflow-hidden flex flex-col shadow-2xl border border-green/20 bg-background/90">
            <div class="flex items-center gap-2 px-4 py-3 border-b border-green/10 shrink-0">
                <div class="flex gap-1.5">
                    <div class="w-3 h-3 rounded-full bg-red"></div>
                    <div class="w-3 h-3 rounded-full bg-yellow"></div>
                    <div class="w-3 h-3 rounded-full bg-green"></div>
                </div>
                <span class="ml-2 text-xs tracking-widest uppercase opacity-40">
                    "bash — chetan@portfolio: ~/portfolio"
                </span>
                <span class="ml-auto text-xs opacity-25">
                    {move || format!("loop #{}", loop_count.get())}
                </span>
            </div>
            {children()}
            <div class="flex items-center gap-4 px-5 py-4 border-t border-green/10">
                <a
                    href="#projects"
                    class="flex items-center gap-2 px-5 py-2 rounded-md text-xs font-bold border border-green/20 text-green hover:bg-green/10"
                >
                    <span class="opacity-60">"▶"</span>
                    " ./view-projects.sh"
                </a>
                <a
                    href="#contact"
                    class="flex items-center gap-2 px-5 py-2 rounded-md text-xs font-bold border border-muted/30 text-muted hover:bg-brightBlack/30"
                >
                    <span class="opacity-40">"$"</span>
                    " ssh hire@chetan.dev"
                </a>
            </div>
        </div>
    }
}

#[component]
fn CommandBlockView(
    prompt: String,
    command: String,
    output: Vec<String>,
    #[prop(optional)] command_cursor: bool,
    #[prop(optional)] output_cursor: bool,
) -> impl IntoView {
    let last_line = output.len().saturating_sub(1);
    view! {
        <div class="mb-4">
            <div class="flex gap-2">
                <span class="text-green opacity-50">{format!("~ {prompt}")}</span>
                <span class="opacity-40">"$"</span>
                <span>{command}</span>
                {command_cursor
                    .then(|| view! { <span class="inline-block w-2 h-4 ml-0.5 bg-green"></span> })}
            </div>
            {output
                .into_iter()
                .enumerate()
                .map(|(i, line)| {
                    view! {
                        <div class="pl-4 mt-1 text-green opacity-70 whitespace-pre-wrap">
                            {line}
                            {(output_cursor && i == last_line)
                                .then(|| {
                                    view! {
                                        <span class="inline-block w-2 h-4 ml-0.5 bg-green align-middle"></span>
                                    }
                                })}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
