#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use image_carousel::app::run;

fn main() {
    run();
}
