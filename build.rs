fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 编译 namechanger.proto，使用 tonic-prost-build 生成 gRPC 服务端和客户端代码
    tonic_prost_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(&["proto/namechanger.proto"], &["proto/"])?;

    // 告诉 cargo 当 proto 文件发生变化时重新构建
    println!("cargo:rerun-if-changed=proto/");

    Ok(())
}
