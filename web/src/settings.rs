use sweeper_core::{Axis, DifficultySettings, MineTier, SizeTier};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsProps {
    #[prop_or_default]
    pub open: bool,
    pub current: DifficultySettings,
    pub on_apply: Callback<DifficultySettings>,
    pub on_cancel: Callback<()>,
}

#[derive(Properties, PartialEq)]
struct TierRowProps<T: PartialEq + 'static> {
    label: AttrValue,
    tiers: [T; 5],
    selected: Axis<T>,
    value: u32,
    on_select: Callback<T>,
}

#[function_component]
fn TierRow<T>(props: &TierRowProps<T>) -> Html
where
    T: Copy + PartialEq + std::fmt::Display + 'static,
{
    html! {
        <section>
            <h3>{&props.label}</h3>
            {
                for props.tiers.into_iter().map(|tier| {
                    let class = classes!(
                        "tier",
                        (props.selected == Axis::Tier(tier)).then_some("selected")
                    );
                    let onclick = props.on_select.reform(move |_: MouseEvent| tier);
                    html! { <button {class} {onclick}>{tier.to_string()}</button> }
                })
            }
            <p>{props.value}</p>
        </section>
    }
}

/// Difficulty picker. Edits a draft and only hands it back on apply.
#[function_component]
pub(crate) fn SettingsView(props: &SettingsProps) -> Html {
    let draft = use_state_eq(|| props.current);

    {
        let draft = draft.clone();
        use_effect_with((props.open, props.current), move |&(_, current)| {
            draft.set(current);
        });
    }

    let on_mines = {
        let draft = draft.clone();
        Callback::from(move |tier| {
            draft.set(DifficultySettings {
                mines: Axis::Tier(tier),
                ..*draft
            })
        })
    };
    let on_width = {
        let draft = draft.clone();
        Callback::from(move |tier| {
            draft.set(DifficultySettings {
                width: Axis::Tier(tier),
                ..*draft
            })
        })
    };
    let on_height = {
        let draft = draft.clone();
        Callback::from(move |tier| {
            draft.set(DifficultySettings {
                height: Axis::Tier(tier),
                ..*draft
            })
        })
    };
    let on_apply = {
        let draft = draft.clone();
        props.on_apply.reform(move |_: MouseEvent| *draft)
    };
    let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());

    html! {
        <dialog id="settings" open={props.open}>
            <article>
                <h2>{"Settings"}</h2>
                <TierRow<MineTier>
                    label="mines:"
                    tiers={MineTier::ALL}
                    selected={draft.mines}
                    value={u32::from(draft.mine_count())}
                    on_select={on_mines}
                />
                <TierRow<SizeTier>
                    label="width:"
                    tiers={SizeTier::ALL}
                    selected={draft.width}
                    value={u32::from(draft.width())}
                    on_select={on_width}
                />
                <TierRow<SizeTier>
                    label="height:"
                    tiers={SizeTier::ALL}
                    selected={draft.height}
                    value={u32::from(draft.height())}
                    on_select={on_height}
                />
                <footer>
                    <button type="reset" onclick={on_cancel}>{"Cancel"}</button>
                    <button onclick={on_apply}>{"Apply"}</button>
                </footer>
            </article>
        </dialog>
    }
}
