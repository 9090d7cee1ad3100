//! Headless demo driver: runs a short wave-defense session and prints
//! the engine's view of it. Useful for eyeballing balance changes
//! without a frontend attached.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use bastion_app::state::GameLoopCommand;
use bastion_core::commands::PlayerCommand;
use bastion_sim::engine::SimConfig;

fn main() {
    let snapshot_slot = Arc::new(Mutex::new(None));
    let tx = bastion_app::game_loop::spawn_game_loop(SimConfig::default(), Arc::clone(&snapshot_slot));

    tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartRun))
        .expect("game loop thread alive");

    for _ in 0..10 {
        std::thread::sleep(Duration::from_secs(1));
        if let Some(snapshot) = snapshot_slot.lock().unwrap().clone() {
            println!(
                "t={:6.2}s wave {} ({:5.1}%)  enemies {:2}  hp {:5.1}/{:5.1}  cash {:7.1}  score {:8.1}{}",
                snapshot.time.elapsed_secs,
                snapshot.wave,
                snapshot.wave_progress_pct,
                snapshot.enemies.len(),
                snapshot.stats.health,
                snapshot.stats.max_health,
                snapshot.cash,
                snapshot.score,
                if snapshot.is_game_over { "  GAME OVER" } else { "" },
            );
            if snapshot.is_game_over {
                break;
            }
        }
    }

    let _ = tx.send(GameLoopCommand::Shutdown);
}
