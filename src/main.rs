use spin_bench::{compare, perf, race, FreezeTest};
use spin_bench::text::WhitespaceVisible;
use spin_bench::worker::Action;
use tokio::runtime::Builder;
use std::hint::black_box;
use std::time::{Duration, Instant};


fn main(){
    let rt = Builder::new_multi_thread()
    .worker_threads(num_cpus::get())
    .enable_all()
    .build()
    .unwrap();

    rt.block_on(async{
        let now = Instant::now();

        let gain = compare(
            || { black_box((0u64..1_000).sum::<u64>()); },
            || { black_box((0u64..10_000).sum::<u64>()); },
            0.5,
        ).await.unwrap();
        println!("compare: {}%", gain);

        let ops = perf(|| { black_box((0u64..1_000).sum::<u64>()); }, 0.5).await.unwrap();
        println!("perf: {} ops/s", ops);

        let actions: Vec<Action> = vec![
            Box::new(|| std::thread::sleep(Duration::from_millis(1))),
            Box::new(|| std::thread::sleep(Duration::from_millis(5))),
            Box::new(|| std::thread::sleep(Duration::from_millis(10))),
        ];
        let results = race(0.5, actions).await.unwrap();
        println!("race: {:?}", results);

        let verdict = FreezeTest::new(|| std::thread::sleep(Duration::from_millis(50)))
            .test(Duration::from_millis(200))
            .await;
        println!("freeze: {:?}", verdict);

        println!("sample: {}", "a b\tc\r\nd".whitespace_visible());
        println!("elapsed: {:?}", now.elapsed());
    });
}
