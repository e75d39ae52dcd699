// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

mod support;

use billfold_tui::view_model::{FocusArea, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use support::*;

#[test]
fn arrow_keys_walk_the_categories_and_update_the_list() {
    let mut model = app_model();
    render_buffer(&mut model, 80, 24);

    apply_keys(&mut model, &[key(KeyCode::Right)]);
    assert_eq!(model.category_bar.active().as_str(), "subscription");

    let buffer = render_buffer(&mut model, 80, 24);
    assert!(find_text(&buffer, "Subscriptions Bills · 1 item").is_some());
    assert!(find_text(&buffer, "Netflix Subscription").is_some());
    assert!(find_text(&buffer, "Electric Bill").is_none());

    apply_keys(&mut model, &[key(KeyCode::Left)]);
    assert_eq!(model.category_bar.active().as_str(), "all");
}

#[test]
fn vim_style_category_keys_mirror_the_arrows() {
    let mut model = app_model();
    render_buffer(&mut model, 80, 24);

    apply_keys(&mut model, &[key(KeyCode::Char('l')), key(KeyCode::Char('l'))]);
    assert_eq!(model.category_bar.active().as_str(), "utilities");
    apply_keys(&mut model, &[key(KeyCode::Char('h'))]);
    assert_eq!(model.category_bar.active().as_str(), "subscription");
}

#[test]
fn home_and_end_jump_to_the_first_and_last_category() {
    let mut model = app_model();
    render_buffer(&mut model, 80, 24);

    apply_keys(&mut model, &[key(KeyCode::End)]);
    assert_eq!(model.category_bar.active().as_str(), "other");
    apply_keys(&mut model, &[key(KeyCode::Home)]);
    assert_eq!(model.category_bar.active().as_str(), "all");
}

#[test]
fn category_selection_does_not_wrap_at_the_ends() {
    let mut model = app_model();
    render_buffer(&mut model, 80, 24);

    apply_keys(&mut model, &[key(KeyCode::Left)]);
    assert_eq!(model.category_bar.active().as_str(), "all");

    apply_keys(&mut model, &[key(KeyCode::End), key(KeyCode::Right)]);
    assert_eq!(model.category_bar.active().as_str(), "other");
}

#[test]
fn changing_the_category_resets_the_bill_selection() {
    let mut model = app_model();
    render_buffer(&mut model, 80, 24);

    apply_keys(&mut model, &[key(KeyCode::Down), key(KeyCode::Down)]);
    assert_eq!(model.bill_list.selected(), 2);

    apply_keys(&mut model, &[key(KeyCode::Right)]);
    assert_eq!(model.bill_list.selected(), 0);
}

#[test]
fn bill_navigation_clamps_to_the_filtered_rows() {
    let mut model = app_model();
    render_buffer(&mut model, 80, 24);

    for _ in 0..10 {
        apply_keys(&mut model, &[key(KeyCode::Char('j'))]);
    }
    assert_eq!(model.bill_list.selected(), 5);

    apply_keys(&mut model, &[key(KeyCode::Char('g'))]);
    assert_eq!(model.bill_list.selected(), 0);
    apply_keys(&mut model, &[key(KeyCode::Char('k'))]);
    assert_eq!(model.bill_list.selected(), 0);

    apply_keys(&mut model, &[key_with(KeyCode::Char('G'), KeyModifiers::SHIFT)]);
    assert_eq!(model.bill_list.selected(), 5);
}

#[test]
fn tab_toggles_the_focused_area() {
    let mut model = app_model();
    assert_eq!(model.focus, FocusArea::Bar);

    apply_keys(&mut model, &[key(KeyCode::Tab)]);
    assert_eq!(model.focus, FocusArea::List);
    apply_keys(&mut model, &[key(KeyCode::Tab)]);
    assert_eq!(model.focus, FocusArea::Bar);
}

#[test]
fn bracket_keys_scroll_the_bar_and_arm_the_animation_near_the_edge() {
    let mut model = app_model();
    render_buffer(&mut model, 80, 24);
    // 80 cols leave a 76-col strip viewport; the default catalog is 169
    // cols wide, so the horizontal range is 0..=93
    assert_eq!(model.category_bar.max_scroll(), 93);

    apply_keys(&mut model, &[key(KeyCode::Char(']'))]);
    assert_eq!(model.category_bar.scroll_offset(), 6);
    assert!(model.category_bar.auto_scroll().is_none());

    for _ in 0..12 {
        apply_keys(&mut model, &[key(KeyCode::Char(']'))]);
    }
    assert_eq!(model.category_bar.scroll_offset(), 78);
    assert!(model.category_bar.auto_scroll().is_none());

    apply_keys(&mut model, &[key(KeyCode::Char(']'))]);
    assert_eq!(model.category_bar.scroll_offset(), 84);
    let animation = model.category_bar.auto_scroll().expect("animation armed");
    assert_eq!(animation.target, 93);
}

#[test]
fn ticks_advance_an_armed_animation_to_its_target() {
    let mut model = app_model();
    render_buffer(&mut model, 80, 24);
    for _ in 0..14 {
        apply_keys(&mut model, &[key(KeyCode::Char(']'))]);
    }
    assert_eq!(model.category_bar.scroll_offset(), 84);

    model.update(Msg::Tick);
    assert_eq!(model.category_bar.scroll_offset(), 87);
    model.update(Msg::Tick);
    model.update(Msg::Tick);
    assert_eq!(model.category_bar.scroll_offset(), 93);
}

#[test]
fn selecting_a_chip_cancels_a_running_animation() {
    let mut model = app_model();
    render_buffer(&mut model, 80, 24);
    for _ in 0..14 {
        apply_keys(&mut model, &[key(KeyCode::Char(']'))]);
    }
    assert!(model.category_bar.auto_scroll().is_some());

    apply_keys(&mut model, &[key(KeyCode::Right)]);
    assert!(model.category_bar.auto_scroll().is_none());
}

#[test]
fn q_requests_exit_once() {
    let mut model = app_model();
    apply_keys(&mut model, &[key(KeyCode::Char('q'))]);

    assert!(model.take_exit_request());
    assert!(!model.take_exit_request());
}

#[test]
fn ctrl_c_requests_exit_but_plain_c_does_not() {
    let mut model = app_model();

    apply_keys(&mut model, &[key(KeyCode::Char('c'))]);
    assert!(!model.take_exit_request());
    assert!(model.high_contrast());

    apply_keys(&mut model, &[key_with(KeyCode::Char('c'), KeyModifiers::CONTROL)]);
    assert!(model.take_exit_request());
}

#[test]
fn escape_asks_for_confirmation_before_quitting() {
    let mut model = app_model();

    apply_keys(&mut model, &[key(KeyCode::Esc)]);
    assert!(!model.take_exit_request());
    assert_eq!(model.status_message(), Some("Press Esc again to quit"));

    apply_keys(&mut model, &[key(KeyCode::Esc)]);
    assert!(model.take_exit_request());
    assert_eq!(model.status_message(), None);
}

#[test]
fn any_other_key_disarms_the_quit_confirmation() {
    let mut model = app_model();
    render_buffer(&mut model, 80, 24);

    apply_keys(&mut model, &[key(KeyCode::Esc), key(KeyCode::Right)]);
    assert_eq!(model.status_message(), None);

    apply_keys(&mut model, &[key(KeyCode::Esc)]);
    assert!(!model.take_exit_request());
}

#[test]
fn unhandled_keys_do_not_request_a_redraw() {
    let mut model = app_model();
    model.needs_redraw = false;

    apply_keys(&mut model, &[key(KeyCode::Char('z'))]);
    assert!(!model.needs_redraw);

    apply_keys(&mut model, &[key(KeyCode::Right)]);
    assert!(model.needs_redraw);
}
