pub mod app;

pub mod event;

pub mod ui;

pub mod tui;

pub mod handler;

pub mod help;

pub mod cli;

pub mod notification;

pub mod form;

pub mod selector;

pub mod entries;

pub mod popup;
