// roster-client/examples/list_employees.rs
// 列出服务器上的所有员工
//
// Usage:
//   ROSTER_URL=http://localhost:4000 cargo run --example list_employees

use roster_client::RosterClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base_url =
        std::env::var("ROSTER_URL").unwrap_or_else(|_| "http://localhost:4000".to_string());

    let client = RosterClient::new(&base_url)?;
    let employees = client.list().await?;

    println!("{} employees at {}", employees.len(), client.base_url());
    for employee in employees {
        println!(
            "#{:<4} {:<24} {:<16} {:<12} {:>10}  {}",
            employee.id,
            employee.full_name,
            employee.role,
            employee.department,
            employee.salary,
            employee.hire_date,
        );
    }

    Ok(())
}
