//! GTK composition: navbar, hero, filter controls, trending strip, card
//! grid, footer, and the in-window detail overlay.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gtk::glib;
use gtk::prelude::*;
use gtk::{
    Align, Application, ApplicationWindow, Box, Button, DropDown, EventControllerKey, FlowBox,
    GestureClick, Grid, Label, Orientation, Overlay, PolicyType, Scale, ScrolledWindow,
    SearchEntry, Separator, Stack, StringList,
};
use tracing::debug;

use crate::catalog::{MovieRecord, BASE_YEAR, GENRES};
use crate::debounce::Debouncer;
use crate::filter::ALL_GENRES;
use crate::state::AppState;
use crate::theme::{self, POSTER_THEMES};

const TRENDING_COUNT: usize = 10;
const HERO_POSTER_COUNT: usize = 6;
const YEAR_MAX: u16 = 2024;

const HERO_WORDS: [&str; 6] = [
    "Movies",
    "Series",
    "Animation",
    "Thrillers",
    "Classics",
    "New Releases",
];

pub fn build_ui(app: &Application, state: Rc<RefCell<AppState>>, debounce_delay: Duration) {
    theme::load_css();

    let window = ApplicationWindow::builder()
        .application(app)
        .title("HD Streams")
        .default_width(1200)
        .default_height(860)
        .build();

    let detail = Rc::new(DetailPanel::new(&window, &state));

    let main_box = Box::new(Orientation::Vertical, 0);
    main_box.append(&build_navbar());
    main_box.append(&Separator::new(Orientation::Horizontal));

    let status_bar = Label::new(Some("Ready"));
    status_bar.set_xalign(0.0);
    status_bar.add_css_class("status");
    status_bar.set_margin_start(12);
    status_bar.set_margin_end(12);
    status_bar.set_margin_top(6);
    status_bar.set_margin_bottom(6);
    main_box.append(&status_bar);

    let (hero, search_entry) = build_hero(&state);
    main_box.append(&hero);
    main_box.append(&Separator::new(Orientation::Horizontal));

    let (controls, genre_dropdown, rating_scale, rating_value, year_scale, year_value) =
        build_controls();
    main_box.append(&controls);

    main_box.append(&build_trending(&state, &detail));

    // Card grid, swapped for an explicit message when nothing matches.
    let flow = FlowBox::new();
    flow.set_selection_mode(gtk::SelectionMode::None);
    flow.set_homogeneous(true);
    flow.set_column_spacing(12);
    flow.set_row_spacing(12);
    flow.set_min_children_per_line(2);
    flow.set_max_children_per_line(5);
    flow.set_margin_start(12);
    flow.set_margin_end(12);
    flow.set_margin_bottom(24);

    let empty_label = Label::new(Some("No matches. Try different filters."));
    empty_label.add_css_class("empty-state");
    empty_label.set_margin_top(48);
    empty_label.set_margin_bottom(48);

    let results_stack = Stack::new();
    results_stack.add_named(&flow, Some("grid"));
    results_stack.add_named(&empty_label, Some("empty"));
    main_box.append(&results_stack);

    main_box.append(&build_footer());

    let page = ScrolledWindow::new();
    page.set_vexpand(true);
    page.set_child(Some(&main_box));

    let overlay = Overlay::new();
    overlay.set_child(Some(&page));
    overlay.add_overlay(&detail.backdrop);
    window.set_child(Some(&overlay));

    refresh_grid(&state, &detail, &flow, &results_stack, &status_bar);

    // Search: keystrokes go through the debouncer, so only the settled value
    // reaches the filter.
    let debouncer = Rc::new(Debouncer::new(debounce_delay));
    let state_clone = state.clone();
    let detail_clone = detail.clone();
    let flow_clone = flow.clone();
    let stack_clone = results_stack.clone();
    let status_clone = status_bar.clone();
    let debouncer_clone = debouncer.clone();
    search_entry.connect_search_changed(move |entry| {
        let query = entry.text().to_string();
        let state_inner = state_clone.clone();
        let detail_inner = detail_clone.clone();
        let flow_inner = flow_clone.clone();
        let stack_inner = stack_clone.clone();
        let status_inner = status_clone.clone();
        debouncer_clone.feed(move || {
            state_inner.borrow_mut().set_query(&query);
            refresh_grid(
                &state_inner,
                &detail_inner,
                &flow_inner,
                &stack_inner,
                &status_inner,
            );
        });
    });

    // Genre filter applies immediately.
    let genre_options: Vec<String> = std::iter::once(ALL_GENRES.to_string())
        .chain(GENRES.iter().map(|g| g.to_string()))
        .collect();
    let state_clone = state.clone();
    let detail_clone = detail.clone();
    let flow_clone = flow.clone();
    let stack_clone = results_stack.clone();
    let status_clone = status_bar.clone();
    genre_dropdown.connect_selected_notify(move |dropdown| {
        let index = dropdown.selected() as usize;
        let genre = genre_options
            .get(index)
            .cloned()
            .unwrap_or_else(|| ALL_GENRES.to_string());
        state_clone.borrow_mut().set_genre(&genre);
        refresh_grid(
            &state_clone,
            &detail_clone,
            &flow_clone,
            &stack_clone,
            &status_clone,
        );
    });

    let state_clone = state.clone();
    let detail_clone = detail.clone();
    let flow_clone = flow.clone();
    let stack_clone = results_stack.clone();
    let status_clone = status_bar.clone();
    rating_scale.connect_value_changed(move |scale| {
        // Snap to the half-point steps the slider advertises.
        let value = (scale.value() * 2.0).round() as f32 / 2.0;
        rating_value.set_text(&format!("{:.1}", value));
        state_clone.borrow_mut().set_min_rating(value);
        refresh_grid(
            &state_clone,
            &detail_clone,
            &flow_clone,
            &stack_clone,
            &status_clone,
        );
    });

    let state_clone = state.clone();
    let detail_clone = detail.clone();
    let flow_clone = flow.clone();
    let stack_clone = results_stack.clone();
    let status_clone = status_bar.clone();
    year_scale.connect_value_changed(move |scale| {
        let year = scale.value().round() as u16;
        year_value.set_text(&year.to_string());
        state_clone.borrow_mut().set_year_from(year);
        refresh_grid(
            &state_clone,
            &detail_clone,
            &flow_clone,
            &stack_clone,
            &status_clone,
        );
    });

    // Escape dismisses the detail overlay.
    let state_clone = state.clone();
    let detail_clone = detail.clone();
    let key_controller = EventControllerKey::new();
    key_controller.connect_key_pressed(move |_, key, _, _| {
        if key == gtk::gdk::Key::Escape && detail_clone.backdrop.is_visible() {
            state_clone.borrow_mut().clear_selection();
            detail_clone.hide();
            return glib::Propagation::Stop;
        }
        glib::Propagation::Proceed
    });
    window.add_controller(key_controller);

    // A pending debounce must not outlive the window it would repaint.
    let debouncer_clone = debouncer.clone();
    window.connect_destroy(move |_| debouncer_clone.cancel());

    window.present();
}

fn build_navbar() -> Box {
    let navbar = Box::new(Orientation::Horizontal, 12);
    navbar.add_css_class("navbar");
    navbar.set_margin_start(12);
    navbar.set_margin_end(12);
    navbar.set_margin_top(12);
    navbar.set_margin_bottom(12);

    let brand = Label::new(None);
    brand.set_markup(
        "<span size='x-large' weight='bold'>🎬 HD</span> <span size='x-large' alpha='60%'>Streams</span>",
    );
    navbar.append(&brand);

    let beta_badge = Label::new(Some("BETA"));
    beta_badge.add_css_class("brand-badge");
    navbar.append(&beta_badge);

    let spacer = Box::new(Orientation::Horizontal, 0);
    spacer.set_hexpand(true);
    navbar.append(&spacer);

    for label in ["✨ Trending", "🔥 Hot Now", "🎞 All"] {
        let pill = Button::with_label(label);
        pill.add_css_class("pill");
        navbar.append(&pill);
    }

    let sign_in = Button::with_label("Sign In");
    sign_in.add_css_class("accent");
    navbar.append(&sign_in);

    navbar
}

fn build_hero(state: &Rc<RefCell<AppState>>) -> (Box, SearchEntry) {
    let hero = Box::new(Orientation::Horizontal, 24);
    hero.set_margin_start(12);
    hero.set_margin_end(12);
    hero.set_margin_top(24);
    hero.set_margin_bottom(24);

    let copy = Box::new(Orientation::Vertical, 12);
    copy.set_hexpand(true);

    let title = Label::new(Some("HD Streams"));
    title.add_css_class("hero-title");
    title.set_xalign(0.0);
    copy.append(&title);

    let subtitle = Label::new(Some(
        "A super-smooth, animation-packed demo UI for movies & series. Type to \
         search, filter by genre, rating, and year. Click a card to view details.",
    ));
    subtitle.add_css_class("hero-subtitle");
    subtitle.set_wrap(true);
    subtitle.set_xalign(0.0);
    subtitle.set_max_width_chars(64);
    copy.append(&subtitle);

    let search_entry = SearchEntry::new();
    search_entry.set_placeholder_text(Some("Search titles, people, or collections..."));
    search_entry.set_hexpand(true);
    copy.append(&search_entry);

    let chips = Box::new(Orientation::Horizontal, 8);
    let try_label = Label::new(Some("Try:"));
    try_label.add_css_class("muted");
    chips.append(&try_label);
    for word in HERO_WORDS {
        let chip = Label::new(Some(word));
        chip.add_css_class("chip");
        chips.append(&chip);
    }
    copy.append(&chips);

    hero.append(&copy);

    // A 3x2 sampler of the first posters next to the copy.
    let mini_grid = Grid::new();
    mini_grid.set_row_spacing(8);
    mini_grid.set_column_spacing(8);
    mini_grid.set_valign(Align::Center);
    for (i, movie) in state
        .borrow()
        .catalog()
        .iter()
        .take(HERO_POSTER_COUNT)
        .enumerate()
    {
        mini_grid.attach(&poster(movie, 104, 156), (i % 3) as i32, (i / 3) as i32, 1, 1);
    }
    hero.append(&mini_grid);

    (hero, search_entry)
}

fn build_controls() -> (Box, DropDown, Scale, Label, Scale, Label) {
    let controls = Box::new(Orientation::Horizontal, 12);
    controls.set_margin_start(12);
    controls.set_margin_end(12);
    controls.set_margin_top(12);
    controls.set_margin_bottom(12);

    let genre_label = Label::new(Some("Genre"));
    genre_label.add_css_class("badge");
    controls.append(&genre_label);

    let mut options: Vec<&str> = vec![ALL_GENRES];
    options.extend(GENRES);
    let genre_list = StringList::new(&options);
    let genre_dropdown = DropDown::new(Some(genre_list), None::<gtk::Expression>);
    genre_dropdown.set_selected(0);
    controls.append(&genre_dropdown);

    let spacer = Box::new(Orientation::Horizontal, 0);
    spacer.set_hexpand(true);
    controls.append(&spacer);

    let rating_label = Label::new(Some("Min Rating"));
    rating_label.add_css_class("badge");
    controls.append(&rating_label);

    let rating_scale = Scale::with_range(Orientation::Horizontal, 0.0, 10.0, 0.5);
    rating_scale.set_draw_value(false);
    rating_scale.set_size_request(160, -1);
    rating_scale.set_value(0.0);
    controls.append(&rating_scale);

    let rating_value = Label::new(Some("0.0"));
    rating_value.add_css_class("muted");
    controls.append(&rating_value);

    let year_label = Label::new(Some("Year From"));
    year_label.add_css_class("badge");
    year_label.set_margin_start(12);
    controls.append(&year_label);

    let year_scale = Scale::with_range(
        Orientation::Horizontal,
        f64::from(BASE_YEAR),
        f64::from(YEAR_MAX),
        1.0,
    );
    year_scale.set_draw_value(false);
    year_scale.set_size_request(200, -1);
    year_scale.set_value(f64::from(BASE_YEAR));
    controls.append(&year_scale);

    let year_value = Label::new(Some(&BASE_YEAR.to_string()));
    year_value.add_css_class("muted");
    controls.append(&year_value);

    (
        controls,
        genre_dropdown,
        rating_scale,
        rating_value,
        year_scale,
        year_value,
    )
}

fn build_trending(state: &Rc<RefCell<AppState>>, detail: &Rc<DetailPanel>) -> Box {
    let section = Box::new(Orientation::Vertical, 8);
    section.set_margin_start(12);
    section.set_margin_end(12);
    section.set_margin_bottom(12);

    let header = Box::new(Orientation::Horizontal, 8);
    let heading = Label::new(Some("✨ Trending Now"));
    heading.add_css_class("section-title");
    heading.set_xalign(0.0);
    heading.set_hexpand(true);
    header.append(&heading);
    let see_all = Button::with_label("See all ›");
    see_all.add_css_class("pill");
    header.append(&see_all);
    section.append(&header);

    let strip = Box::new(Orientation::Horizontal, 16);
    for movie in state.borrow().catalog().iter().take(TRENDING_COUNT) {
        let entry = Box::new(Orientation::Vertical, 8);
        entry.append(&poster(movie, 180, 270));

        let row = Box::new(Orientation::Horizontal, 8);
        let title = Label::new(Some(&movie.title));
        title.set_xalign(0.0);
        title.set_hexpand(true);
        row.append(&title);
        let rating = Label::new(Some(&format!("★ {:.1}", movie.rating)));
        rating.add_css_class("rating");
        row.append(&rating);
        entry.append(&row);

        let movie_id = movie.id;
        let state_clone = state.clone();
        let detail_clone = detail.clone();
        let click = GestureClick::new();
        click.connect_released(move |_, _, _, _| {
            open_detail(&state_clone, &detail_clone, movie_id);
        });
        entry.add_controller(click);

        strip.append(&entry);
    }

    // Drag or scroll sideways; the strip never wraps.
    let scroller = ScrolledWindow::new();
    scroller.set_policy(PolicyType::Automatic, PolicyType::Never);
    scroller.set_propagate_natural_height(true);
    scroller.set_child(Some(&strip));
    section.append(&scroller);

    section
}

fn build_footer() -> Box {
    let footer = Box::new(Orientation::Horizontal, 48);
    footer.add_css_class("footer");
    footer.set_margin_start(12);
    footer.set_margin_end(12);
    footer.set_margin_top(24);
    footer.set_margin_bottom(24);

    let brand_col = Box::new(Orientation::Vertical, 8);
    brand_col.set_hexpand(true);
    let brand = Label::new(None);
    brand.set_markup("<b>🎬 HD Streams</b>");
    brand.set_xalign(0.0);
    brand_col.append(&brand);
    let blurb = Label::new(Some(
        "Demo UI only. No streaming content is hosted here. Replace the \
         placeholder data with your catalog or API.",
    ));
    blurb.add_css_class("muted");
    blurb.set_wrap(true);
    blurb.set_xalign(0.0);
    blurb.set_max_width_chars(40);
    brand_col.append(&blurb);
    footer.append(&brand_col);

    let columns = [
        ("Discover", vec!["Trending", "New Releases", "Top Rated", "Collections"]),
        ("Genres", GENRES[..6].to_vec()),
        ("Company", vec!["About", "Careers", "Contact", "Terms"]),
    ];
    for (heading, entries) in columns {
        let column = Box::new(Orientation::Vertical, 4);
        let head = Label::new(Some(heading));
        head.add_css_class("footer-heading");
        head.set_xalign(0.0);
        column.append(&head);
        for entry in entries {
            let label = Label::new(Some(entry));
            label.add_css_class("muted");
            label.set_xalign(0.0);
            column.append(&label);
        }
        footer.append(&column);
    }

    footer
}

/// Gradient poster tile with the title pinned to the bottom edge.
fn poster(movie: &MovieRecord, width: i32, height: i32) -> Box {
    let tile = Box::new(Orientation::Vertical, 0);
    tile.add_css_class("poster");
    tile.add_css_class(&movie.theme);
    tile.set_size_request(width, height);

    let title = Label::new(Some(&movie.title));
    title.add_css_class("poster-title");
    title.set_wrap(true);
    title.set_vexpand(true);
    title.set_valign(Align::End);
    title.set_margin_start(10);
    title.set_margin_end(10);
    title.set_margin_bottom(10);
    tile.append(&title);

    tile
}

fn movie_card(movie: &MovieRecord) -> Box {
    let card = Box::new(Orientation::Vertical, 8);
    card.add_css_class("card");
    card.append(&poster(movie, 180, 260));

    let info_row = Box::new(Orientation::Horizontal, 8);
    let genre_badge = Label::new(Some(&movie.genre));
    genre_badge.add_css_class("badge");
    info_row.append(&genre_badge);
    let rating = Label::new(Some(&format!("★ {:.1}", movie.rating)));
    rating.add_css_class("rating");
    info_row.append(&rating);
    card.append(&info_row);

    let meta = Label::new(Some(&format!("{} • {}m", movie.year, movie.duration)));
    meta.add_css_class("muted");
    meta.set_xalign(0.0);
    card.append(&meta);

    card
}

/// Rebuild the card grid from the current criteria and update the status
/// line; flips to the empty-state page when nothing matches.
fn refresh_grid(
    state: &Rc<RefCell<AppState>>,
    detail: &Rc<DetailPanel>,
    flow: &FlowBox,
    results_stack: &Stack,
    status_bar: &Label,
) {
    let movies = state.borrow().filtered();
    let total = state.borrow().catalog().len();

    while let Some(child) = flow.first_child() {
        flow.remove(&child);
    }
    for movie in &movies {
        let card = movie_card(movie);
        let movie_id = movie.id;
        let state_clone = state.clone();
        let detail_clone = detail.clone();
        let click = GestureClick::new();
        click.connect_released(move |_, _, _, _| {
            open_detail(&state_clone, &detail_clone, movie_id);
        });
        card.add_controller(click);
        flow.insert(&card, -1);
    }

    if movies.is_empty() {
        results_stack.set_visible_child_name("empty");
    } else {
        results_stack.set_visible_child_name("grid");
    }
    status_bar.set_text(&format!("{} of {} titles", movies.len(), total));
    debug!(matches = movies.len(), "grid refreshed");
}

fn open_detail(state: &Rc<RefCell<AppState>>, detail: &Rc<DetailPanel>, id: u32) {
    let movie = state.borrow_mut().select(id).cloned();
    if let Some(movie) = movie {
        let saved = state.borrow().is_favorite(movie.id);
        detail.show(&movie, saved);
    }
}

fn set_saved_label(button: &Button, saved: bool) {
    if saved {
        button.set_label("♥ Saved");
        button.add_css_class("saved");
    } else {
        button.set_label("♡ Watchlist");
        button.remove_css_class("saved");
    }
}

/// Dimmed backdrop plus the centered detail panel, overlaid on the page.
/// Clicking the backdrop dismisses; the panel claims its own clicks so they
/// never reach the dismiss handler.
struct DetailPanel {
    backdrop: Box,
    poster: Box,
    poster_title: Label,
    genre_badge: Label,
    rating_badge: Label,
    duration_badge: Label,
    title: Label,
    subtitle: Label,
    description: Label,
    save_button: Button,
}

impl DetailPanel {
    fn new(window: &ApplicationWindow, state: &Rc<RefCell<AppState>>) -> Self {
        let backdrop = Box::new(Orientation::Horizontal, 0);
        backdrop.add_css_class("backdrop");
        backdrop.set_visible(false);

        let panel = Box::new(Orientation::Horizontal, 0);
        panel.add_css_class("detail-panel");
        panel.set_halign(Align::Center);
        panel.set_valign(Align::Center);
        panel.set_hexpand(true);
        panel.set_vexpand(true);

        let left = Box::new(Orientation::Vertical, 8);
        left.set_margin_start(16);
        left.set_margin_end(16);
        left.set_margin_top(16);
        left.set_margin_bottom(16);

        let poster = Box::new(Orientation::Vertical, 0);
        poster.add_css_class("poster");
        poster.set_size_request(280, 420);
        let poster_title = Label::new(None);
        poster_title.add_css_class("poster-title");
        poster_title.set_wrap(true);
        poster_title.set_vexpand(true);
        poster_title.set_valign(Align::End);
        poster_title.set_margin_start(10);
        poster_title.set_margin_end(10);
        poster_title.set_margin_bottom(10);
        poster.append(&poster_title);
        left.append(&poster);

        let badge_row = Box::new(Orientation::Horizontal, 8);
        let genre_badge = Label::new(None);
        genre_badge.add_css_class("badge");
        badge_row.append(&genre_badge);
        let rating_badge = Label::new(None);
        rating_badge.add_css_class("badge");
        badge_row.append(&rating_badge);
        let duration_badge = Label::new(None);
        duration_badge.add_css_class("badge");
        badge_row.append(&duration_badge);
        left.append(&badge_row);

        panel.append(&left);

        let right = Box::new(Orientation::Vertical, 8);
        right.set_margin_start(16);
        right.set_margin_end(16);
        right.set_margin_top(16);
        right.set_margin_bottom(16);
        right.set_size_request(400, -1);

        let top_row = Box::new(Orientation::Horizontal, 8);
        let title = Label::new(None);
        title.set_xalign(0.0);
        title.set_wrap(true);
        title.set_hexpand(true);
        top_row.append(&title);
        let close_button = Button::with_label("✕");
        close_button.add_css_class("pill");
        close_button.set_valign(Align::Start);
        top_row.append(&close_button);
        right.append(&top_row);

        let subtitle = Label::new(None);
        subtitle.add_css_class("muted");
        subtitle.set_xalign(0.0);
        right.append(&subtitle);

        let description = Label::new(None);
        description.set_wrap(true);
        description.set_xalign(0.0);
        description.set_max_width_chars(48);
        right.append(&description);

        let action_row = Box::new(Orientation::Horizontal, 8);
        action_row.set_margin_top(8);
        let play_button = Button::with_label("▶ Play Trailer");
        play_button.add_css_class("accent");
        action_row.append(&play_button);
        let save_button = Button::with_label("♡ Watchlist");
        save_button.add_css_class("save-button");
        action_row.append(&save_button);
        right.append(&action_row);

        let cast_grid = Grid::new();
        cast_grid.set_row_spacing(8);
        cast_grid.set_column_spacing(8);
        cast_grid.set_margin_top(12);
        for i in 0..6 {
            let slot = Box::new(Orientation::Vertical, 2);
            slot.add_css_class("cast-slot");
            let name = Label::new(Some(&format!("Cast #{}", i + 1)));
            name.set_xalign(0.0);
            slot.append(&name);
            let role = Label::new(Some("Role"));
            role.add_css_class("muted");
            role.set_xalign(0.0);
            slot.append(&role);
            cast_grid.attach(&slot, i % 3, i / 3, 1, 1);
        }
        right.append(&cast_grid);

        panel.append(&right);
        backdrop.append(&panel);

        // Clicks inside the panel stay inside the panel.
        let panel_click = GestureClick::new();
        panel_click.connect_pressed(|gesture, _, _, _| {
            gesture.set_state(gtk::EventSequenceState::Claimed);
        });
        panel.add_controller(panel_click);

        let state_clone = state.clone();
        let backdrop_clone = backdrop.clone();
        let backdrop_click = GestureClick::new();
        backdrop_click.connect_released(move |_, _, _, _| {
            state_clone.borrow_mut().clear_selection();
            backdrop_clone.set_visible(false);
        });
        backdrop.add_controller(backdrop_click);

        let state_clone = state.clone();
        let backdrop_clone = backdrop.clone();
        close_button.connect_clicked(move |_| {
            state_clone.borrow_mut().clear_selection();
            backdrop_clone.set_visible(false);
        });

        let window_clone = window.clone();
        play_button.connect_clicked(move |_| {
            let dialog = gtk::AlertDialog::builder()
                .message("Demo only")
                .detail("No player is wired up. Bring your own and hook it here.")
                .build();
            dialog.show(Some(&window_clone));
        });

        let state_clone = state.clone();
        save_button.connect_clicked(move |button| {
            let selected = state_clone.borrow().selection_id();
            if let Some(id) = selected {
                let saved = state_clone.borrow_mut().toggle_favorite(id);
                set_saved_label(button, saved);
            }
        });

        Self {
            backdrop,
            poster,
            poster_title,
            genre_badge,
            rating_badge,
            duration_badge,
            title,
            subtitle,
            description,
            save_button,
        }
    }

    fn show(&self, movie: &MovieRecord, saved: bool) {
        for theme_class in POSTER_THEMES {
            self.poster.remove_css_class(theme_class);
        }
        self.poster.add_css_class(&movie.theme);
        self.poster_title.set_text(&movie.title);
        self.genre_badge.set_text(&movie.genre);
        self.rating_badge.set_text(&format!("★ {:.1}", movie.rating));
        self.duration_badge.set_text(&format!("{}m", movie.duration));
        self.title.set_markup(&format!(
            "<span size='x-large' weight='bold'>{}</span>",
            movie.title
        ));
        self.subtitle.set_text(&format!("{} • {}", movie.year, movie.genre));
        self.description.set_text(&movie.description);
        set_saved_label(&self.save_button, saved);
        self.backdrop.set_visible(true);
    }

    fn hide(&self) {
        self.backdrop.set_visible(false);
    }
}
