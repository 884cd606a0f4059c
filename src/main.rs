use cl_vecadd::VectorAdd;

fn adders() -> Vec<Box<dyn VectorAdd>> {
    #[allow(unused_mut)]
    let mut adders: Vec<Box<dyn VectorAdd>> = vec![Box::new(cl_vecadd::SequentialAdder::new())];

    #[cfg(feature = "opencl")]
    adders.push(Box::new(cl_vecadd::OpenCLAdder::new()));

    adders
}

fn main() {
    for adder in adders() {
        match adder.time_add() {
            Ok(elapsed) => println!("Adding vectors using {}: {elapsed}", adder.label()),
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        }
    }
}
