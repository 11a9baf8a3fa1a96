//! A headless stand-in for a game loop: one thread updates hit boxes as game logic would, while the
//! main thread "draws" their outlines and checks collisions once per tick.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use hitbox::core::prelude::*;
use hitbox::info_every_millis;
use rand::Rng;

struct Sprite {
    name: &'static str,
    hit_box: HitBox,
}

fn outline(hit_box: &HitBox) -> String {
    let corners = hit_box.corners();
    // Closed polyline: back to the first corner.
    corners
        .iter()
        .chain(corners.first())
        .join(" -> ")
}

fn update(sprites: &[Sprite], tick: u64, rng: &mut impl Rng) {
    let [player, enemy, wall] = sprites else {
        return;
    };
    player
        .hit_box
        .rotate_absolute(DEMO_DEGREES_PER_TICK * tick as f64);
    if tick % 60 == 0 {
        player.hit_box.flip_around_center(FlipMode::Horizontal);
    }

    let Point { x, y } = enemy.hit_box.origin();
    enemy
        .hit_box
        .move_to(x - 1 + rng.gen_range(-1..=1), y + rng.gen_range(-1..=1));
    enemy
        .hit_box
        .rotate_around(-DEMO_DEGREES_PER_TICK, wall.hit_box.center());
}

fn main() -> Result<()> {
    setup_log_or_stderr();

    let sprites = [
        Sprite {
            name: "player",
            hit_box: HitBox::try_new(100, 100, 40, 20)?,
        },
        Sprite {
            name: "enemy",
            hit_box: HitBox::try_new(220, 100, 24, 24)?,
        },
        Sprite {
            name: "wall",
            hit_box: HitBox::try_new(150, 60, 20, 100)?,
        },
    ];
    let running = AtomicBool::new(true);

    thread::scope(|s| {
        s.spawn(|| {
            let mut rng = rand::thread_rng();
            for tick in 0..DEMO_TICKS {
                update(&sprites, tick, &mut rng);
                thread::sleep(Duration::from_millis(DEMO_TICK_INTERVAL_MS));
            }
            running.store(false, Ordering::Release);
        });

        let mut collisions = 0_u64;
        while running.load(Ordering::Acquire) {
            for sprite in &sprites {
                info_every_millis!(500, "{}: {}", sprite.name, outline(&sprite.hit_box));
            }
            for (a, b) in sprites.iter().tuple_combinations() {
                if collide(&a.hit_box, &b.hit_box) {
                    collisions += 1;
                    info_every_millis!(250, "{} collides with {}", a.name, b.name);
                }
            }
            thread::sleep(Duration::from_millis(DEMO_TICK_INTERVAL_MS));
        }
        info!("done: {collisions} collisions observed");
    });
    Ok(())
}

fn setup_log_or_stderr() {
    if let Err(e) = hitbox::util::setup_log() {
        if let Err(fallback) = tracing_subscriber::fmt().with_target(false).try_init() {
            eprintln!("could not set up logging: {e:?}; stderr fallback failed: {fallback}");
            return;
        }
        warn!("falling back to stderr logging: {e:?}");
    }
}
