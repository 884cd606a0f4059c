use cl_vecadd::{
    opencl::{
        api::MemFlags, device_required, enqueue_kernel, KernelSource, OpenCL, ProgramBuildError,
    },
    BenchError, ErrorKind, OpenCLAdder, SequentialAdder, VectorAdd, KERNEL_NAME, KERNEL_PATH,
    LIST_SIZE,
};

/// Returns `None` (and the test passes) on machines without an OpenCL platform or device,
/// unless `CL_VECADD_REQUIRE_DEVICE` is set.
fn device() -> cl_vecadd::Result<Option<OpenCL>> {
    match OpenCL::new() {
        Ok(device) => Ok(Some(device)),
        Err(err) if err.kind::<BenchError>().is_some() && !device_required() => {
            eprintln!("skipping, {err} Set CL_VECADD_REQUIRE_DEVICE to fail instead.");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

#[test]
fn test_write_read() -> cl_vecadd::Result<()> {
    let Some(device) = device()? else {
        return Ok(());
    };
    println!("{device:?}");

    let mut buf = device.alloc::<i32>(6, MemFlags::MemReadWrite as u64)?;
    device.write(&mut buf, &[1, 5, 3, 2, 7, 8])?;
    assert_eq!(device.read(&buf, 6)?, vec![1, 5, 3, 2, 7, 8]);
    assert_eq!(device.read(&buf, 2)?, vec![1, 5]);

    assert!(device.read(&buf, 7).is_err());
    assert!(device.write(&mut buf, &[0; 7]).is_err());
    Ok(())
}

#[test]
fn test_build_error_has_log() -> cl_vecadd::Result<()> {
    let Some(device) = device()? else {
        return Ok(());
    };

    let src = KernelSource::from("__kernel void vector_add(__global int* C) { C[0] = missing; }");
    let Err(err) = device.build_kernel(&src, "vector_add") else {
        panic!("the kernel must not build");
    };

    let build_err = err.kind::<ProgramBuildError>().expect("a build error");
    assert!(!build_err.log.trim().is_empty(), "{err}");
    Ok(())
}

#[test]
fn test_unknown_kernel_name() -> cl_vecadd::Result<()> {
    let Some(device) = device()? else {
        return Ok(());
    };

    let src = KernelSource::load(KERNEL_PATH)?;
    assert!(device.build_kernel(&src, "vector_sub").is_err());
    assert!(device.build_kernel(&src, KERNEL_NAME).is_ok());
    Ok(())
}

#[test]
fn test_enqueue_empty_range() -> cl_vecadd::Result<()> {
    let Some(device) = device()? else {
        return Ok(());
    };

    let src = KernelSource::load(KERNEL_PATH)?;
    let compiled = device.build_kernel(&src, KERNEL_NAME)?;
    assert!(enqueue_kernel(&device, &compiled.kernel, 0, None).is_err());
    Ok(())
}

#[test]
fn test_opencl_matches_sequential() -> cl_vecadd::Result<()> {
    if device()?.is_none() {
        return Ok(());
    }

    let cl = OpenCLAdder::new().keep_output().measure()?;
    let cpu = SequentialAdder::new().keep_output().measure()?;

    let cl_out = cl.output.unwrap();
    assert_eq!(cl_out.len(), LIST_SIZE);
    assert_eq!(cl_out, cpu.output.unwrap());
    Ok(())
}

#[test]
fn test_opencl_odd_len() -> cl_vecadd::Result<()> {
    if device()?.is_none() {
        return Ok(());
    }

    let out = OpenCLAdder::new()
        .with_len(100)
        .keep_output()
        .measure()?
        .output
        .unwrap();
    assert_eq!(out, vec![100; 100]);
    Ok(())
}

#[test]
fn test_opencl_twice_is_independent() -> cl_vecadd::Result<()> {
    if device()?.is_none() {
        return Ok(());
    }

    let adder = OpenCLAdder::new().keep_output();
    let first = adder.measure()?;
    let second = adder.measure()?;
    assert_eq!(first.output, second.output);

    assert_eq!(OpenCLAdder::new().measure()?.output, None);
    Ok(())
}
