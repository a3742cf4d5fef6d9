// Pattern 1: Adapter - one playback interface over incompatible players.

use design_patterns::adapter::{self, GenericAdapter, MediaPlayer, VlcPlayer};
use design_patterns::logging;

fn main() {
    logging::init("warn");

    println!("Pattern 1: Adapter");
    println!("==================\n");

    println!("=== Adapter Pattern (Trait Objects) ===");
    adapter::demo();
    println!();

    println!("=== Adapter Pattern (Generics) ===");
    let generic = GenericAdapter::new(VlcPlayer);
    println!("{}", generic.play("vlc", "video.mkv"));
}
