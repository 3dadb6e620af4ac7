use crate::settings::SettingsView;
use crate::store::BrowserStore;
use crate::utils::*;
use bitflags::bitflags;
use clap::Args;
use gloo::timers::callback::Interval;
use sweeper_core as game;
use sweeper_core::{DifficultySettings, MoveKind, PersistentGame};
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
enum ViewCellState {
    Hidden,
    Revealed(u8),
    Flagged,
    TriggeredMine,
    Mine,
    Misflagged,
}

/// What a cell looks like to the player. After a win every mine shows as a flag.
fn view_cell_state(game: &game::Game, coords: game::Coord2) -> ViewCellState {
    use game::CellState::*;

    let state = game.state();
    let has_mine = game.grid()[coords].is_mine();
    match game.cell_at(coords) {
        _ if state == game::GameState::Won && has_mine => ViewCellState::Flagged,
        Covered => ViewCellState::Hidden,
        Flagged if state == game::GameState::Lost && !has_mine => ViewCellState::Misflagged,
        Flagged => ViewCellState::Flagged,
        Uncovered(count) => ViewCellState::Revealed(count),
        Detonated => ViewCellState::TriggeredMine,
        Mine => ViewCellState::Mine,
    }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    struct MouseButtons: u16 {
        const LEFT    = 1;
        const RIGHT   = 1 << 1;
        const MIDDLE  = 1 << 2;
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct CellPointerState {
    pos: game::Coord2,
    buttons: MouseButtons,
    shift: bool,
}

impl CellPointerState {
    /// Move made when the buttons are released: left uncovers, right or shift+left flags.
    fn released(self) -> Option<MoveKind> {
        match self.buttons {
            MouseButtons::LEFT if self.shift => Some(MoveKind::Flag),
            MouseButtons::LEFT => Some(MoveKind::Uncover),
            MouseButtons::RIGHT => Some(MoveKind::Flag),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum CellMsg {
    Update(CellPointerState),
    Leave,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    CellEvent(CellMsg),
    Tick,
    NewGame,
    ToggleSettings,
    ApplySettings(DifficultySettings),
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    pos: game::Coord2,
    cell_state: ViewCellState,
    #[prop_or_default]
    pressed: bool,
    callback: Callback<CellMsg>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    use ViewCellState::*;

    let CellProps {
        pos,
        cell_state,
        pressed,
        callback,
    } = props.clone();

    let mut class = classes!(
        "cell",
        match cell_state {
            Hidden => classes!(),
            Revealed(count) => classes!("open", format!("num-{}", count)),
            Flagged => classes!("flag"),
            TriggeredMine => classes!("open", "mine", "oops"),
            Mine => classes!("open", "mine"),
            Misflagged => classes!("flag", "wrong"),
        }
    );
    if pressed {
        class.push("open");
    }

    let pointer_update = move |e: MouseEvent| {
        CellMsg::Update(CellPointerState {
            pos,
            buttons: MouseButtons::from_bits_truncate(e.buttons()),
            shift: e.shift_key(),
        })
    };
    let onmousedown = callback.reform(pointer_update);
    let onmouseup = callback.reform(pointer_update);
    let onmouseenter = callback.reform(pointer_update);
    let onmouseleave = callback.reform(|_: MouseEvent| CellMsg::Leave);

    html! {
        <td {class} {onmousedown} {onmouseup} {onmouseenter} {onmouseleave}/>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Mine density preset for new games
    #[arg(long)]
    mines: Option<game::MineTier>,

    /// Width preset for new games
    #[arg(long)]
    width: Option<game::SizeTier>,

    /// Height preset for new games
    #[arg(long)]
    height: Option<game::SizeTier>,
}

impl GameProps {
    /// `settings` with any preset given on the command line swapped in.
    fn apply_to(&self, settings: DifficultySettings) -> DifficultySettings {
        DifficultySettings {
            mines: self.mines.map_or(settings.mines, game::Axis::Tier),
            width: self.width.map_or(settings.width, game::Axis::Tier),
            height: self.height.map_or(settings.height, game::Axis::Tier),
        }
    }
}

pub(crate) struct GameView {
    game: PersistentGame<BrowserStore>,
    shown_tenths: u64,
    new_best: bool,
    settings_open: bool,
    current_cell_state: Option<CellPointerState>,
    timer: Option<Interval>,
    forced_seed: Option<u64>,
}

impl GameView {
    fn next_seed(&mut self) -> u64 {
        self.forced_seed.take().unwrap_or_else(js_random_seed)
    }

    fn create_timer(ctx: &Context<Self>) -> Interval {
        let link = ctx.link().clone();
        Interval::new(100, move || link.send_message(Msg::Tick))
    }

    /// Runs the timer exactly while the clock is ticking. Dropping the interval cancels it.
    fn sync_timer(&mut self, ctx: &Context<Self>) {
        let ticking = self.game.game().session().clock().is_ticking();
        match (ticking, self.timer.is_some()) {
            (true, false) => self.timer = Some(Self::create_timer(ctx)),
            (false, true) => self.timer = None,
            _ => {}
        }
    }

    fn start_new_game(&mut self) {
        let seed = self.next_seed();
        if let Err(err) = self.game.new_game(seed) {
            log::error!("could not start a new game: {}", err);
        }
        self.new_best = false;
        self.shown_tenths = 0;
    }

    fn play(&mut self, pos: game::Coord2, kind: MoveKind) {
        let now = utc_now();
        let report = match kind {
            MoveKind::Uncover => self.game.uncover(pos, now),
            MoveKind::Flag => self.game.toggle_flag(pos, now),
        };
        match report {
            Ok(report) if report.outcome.has_update() => {
                log::debug!("{:?} at {:?}: {:?}", kind, pos, report);
                self.new_best |= report.new_best;
            }
            Ok(report) => log::trace!("{:?} at {:?} changed nothing: {:?}", kind, pos, report.outcome),
            Err(err) => log::error!("{:?} at {:?} failed: {}", kind, pos, err),
        }
    }

    fn is_playable(&self) -> bool {
        !self.game.game().is_finished()
    }

    fn is_pressed(&self, coords: game::Coord2, cell_state: ViewCellState) -> bool {
        matches!(
            (self.current_cell_state, cell_state),
            (
                Some(CellPointerState {
                    pos,
                    buttons: MouseButtons::LEFT,
                    shift: false,
                }),
                ViewCellState::Hidden,
            ) if pos == coords && self.is_playable()
        )
    }

    fn game_state_class(&self) -> Classes {
        use game::GameState::*;
        let mid_open = matches!(
            self.current_cell_state,
            Some(CellPointerState {
                buttons: MouseButtons::LEFT,
                ..
            })
        );
        classes!(match self.game.game().state() {
            Ready | Active if mid_open => "mid-open",
            Ready => "not-started",
            Active => "in-progress",
            Won => "win",
            Lost => "lose",
        })
    }

    fn on_cell_event(&mut self, msg: CellMsg) -> bool {
        match msg {
            CellMsg::Leave => self.current_cell_state.take().is_some(),
            CellMsg::Update(cell_state) if cell_state.buttons.is_empty() => {
                match self.current_cell_state.take() {
                    None => false,
                    Some(pressed) => {
                        if let Some(kind) = pressed.released() {
                            self.play(pressed.pos, kind);
                        }
                        true
                    }
                }
            }
            CellMsg::Update(cell_state) => {
                self.current_cell_state.replace(cell_state) != Some(cell_state)
            }
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let mut game = PersistentGame::open(BrowserStore::new(), js_random_seed(), utc_now())
            .expect("default difficulty is always playable");

        let mut this = Self {
            shown_tenths: game.tick(utc_now()) / 100,
            game,
            new_best: false,
            settings_open: false,
            current_cell_state: None,
            timer: None,
            forced_seed: props.seed,
        };

        let requested = props.apply_to(this.game.settings());
        if requested != this.game.settings() || props.seed.is_some() {
            match this.game.set_difficulty(requested) {
                Ok(()) => this.start_new_game(),
                Err(err) => log::warn!("ignoring requested difficulty {:?}: {}", requested, err),
            }
        }

        this.sync_timer(ctx);
        this
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        let updated = match msg {
            CellEvent(cell_msg) => {
                log::trace!("cell event: {:?}", cell_msg);
                self.on_cell_event(cell_msg)
            }
            Tick => {
                let tenths = self.game.tick(utc_now()) / 100;
                std::mem::replace(&mut self.shown_tenths, tenths) != tenths
            }
            NewGame => {
                self.start_new_game();
                true
            }
            ToggleSettings => {
                self.settings_open = !self.settings_open;
                true
            }
            ApplySettings(settings) => {
                self.settings_open = false;
                match self.game.set_difficulty(settings) {
                    Ok(()) => self.start_new_game(),
                    Err(err) => log::warn!("rejected difficulty {:?}: {}", settings, err),
                }
                true
            }
        };

        self.sync_timer(ctx);
        updated
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let game = self.game.game();
        let (rows, cols) = game.size();
        let mines_left = game.mines_left().to_string();
        let elapsed_time = format_elapsed(game.elapsed_ms());
        let best_time = format_best(self.game.best_time());

        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            NewGame
        });
        let cb_show_settings = ctx.link().callback(|_| ToggleSettings);
        let cb_apply = ctx.link().callback(ApplySettings);
        let cb_cancel = ctx.link().callback(|()| ToggleSettings);

        html! {
            <div class="sweeper" oncontextmenu={Callback::from(move |e: MouseEvent| e.prevent_default())}>
                <small onclick={cb_show_settings}>{"···"}</small>
                <nav>
                    <aside>{mines_left}</aside>
                    <span><button class={self.game_state_class()} onclick={cb_new_game}/></span>
                    <aside>{elapsed_time}</aside>
                </nav>
                <table class={self.is_playable().then_some("playable")}>
                    {
                        for (0..rows).map(|row| html! {
                            <tr>
                                {
                                    for (0..cols).map(|col| {
                                        let pos = (row, col);
                                        let cell_state = view_cell_state(game, pos);
                                        let pressed = self.is_pressed(pos, cell_state);
                                        let callback = ctx.link().callback(Msg::CellEvent);
                                        html! {
                                            <CellView {pos} {cell_state} {pressed} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                <footer class={self.new_best.then_some("new-best")}>{"best: "}{best_time}</footer>
                <SettingsView
                    open={self.settings_open}
                    current={self.game.settings()}
                    on_apply={cb_apply}
                    on_cancel={cb_cancel}
                />
            </div>
        }
    }
}
