use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn contas(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("contas").unwrap();
    cmd.arg("--dir").arg(dir.path()).env_remove("CONTAS_DIR");
    cmd
}

#[test]
fn menu_exits_on_option_8() {
    let dir = TempDir::new().unwrap();

    contas(&dir)
        .write_stdin("8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Gerenciador de Contas ==="))
        .stdout(predicate::str::contains("Saindo do sistema. Até logo!"));
}

#[test]
fn menu_exits_on_end_of_input() {
    let dir = TempDir::new().unwrap();

    contas(&dir)
        .arg("menu")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Escolha uma opção: "));
}

#[test]
fn menu_create_then_list() {
    let dir = TempDir::new().unwrap();

    contas(&dir)
        .write_stdin("1\ncrédito\nSalário\n5000\n05/06/2024\n05/06/2024\nrenda\npago\nalta\n\n2\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Conta criada com sucesso!"))
        .stdout(predicate::str::contains("Salário"));

    let ledger = std::fs::read_to_string(dir.path().join("contas.csv")).unwrap();
    assert!(ledger.starts_with(
        "tipo,descricao,valor,data_vencimento,data_recebimento,categoria,status,prioridade,comentarios\n"
    ));
    assert!(ledger.contains("crédito,Salário,5000,05/06/2024"));
}

#[test]
fn bill_add_list_and_delete() {
    let dir = TempDir::new().unwrap();

    contas(&dir)
        .args(["bill", "add", "debito", "Aluguel", "1200", "05/03/2024"])
        .args(["--categoria", "moradia", "--status", "pendente"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Conta criada com sucesso!"));

    contas(&dir)
        .args(["bill", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Aluguel"))
        .stdout(predicate::str::contains("débito"))
        .stdout(predicate::str::contains("1 conta(s)"));

    contas(&dir)
        .args(["bill", "delete", "Aluguel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Conta deletada!"));

    contas(&dir)
        .args(["bill", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nenhuma conta cadastrada."));
}

#[test]
fn bill_add_rejects_bad_amount() {
    let dir = TempDir::new().unwrap();

    contas(&dir)
        .args(["bill", "add", "débito", "Luz", "cem", "10/03/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount 'cem'"));
}

#[test]
fn bill_update_and_history() {
    let dir = TempDir::new().unwrap();

    contas(&dir)
        .args(["bill", "add", "débito", "Internet", "99.90", "15/03/2024"])
        .assert()
        .success();

    contas(&dir)
        .args(["bill", "update", "Internet", "--valor", "109.90", "--status", "pago"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Conta atualizada!"));

    contas(&dir)
        .args(["bill", "update", "Telefone", "--status", "pago"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Conta não encontrada."));

    contas(&dir)
        .args(["bill", "history", "-n", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Internet"))
        .stdout(predicate::str::contains("UPDATE Internet"))
        .stdout(predicate::str::contains("valor: \"99.90\" -> \"109.90\""));
}

#[test]
fn bill_search_filters() {
    let dir = TempDir::new().unwrap();

    contas(&dir)
        .args(["bill", "add", "débito", "Mercado", "300", "02/04/2024", "-c", "alimentação"])
        .assert()
        .success();
    contas(&dir)
        .args(["bill", "add", "débito", "Cinema", "40", "03/04/2024", "-c", "lazer"])
        .assert()
        .success();

    contas(&dir)
        .args(["bill", "search", "--categoria", "LAZER"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cinema"))
        .stdout(predicate::str::contains("Mercado").not());

    contas(&dir)
        .args(["bill", "search", "--tipo", "crédito"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nenhuma conta encontrada."));
}

#[test]
fn reports_on_ledger() {
    let dir = TempDir::new().unwrap();

    contas(&dir)
        .args(["bill", "add", "débito", "Aluguel", "1200", "05/03/2024", "-c", "moradia"])
        .assert()
        .success();
    contas(&dir)
        .args(["bill", "add", "crédito", "Salário", "5000", "05/03/2024", "-c", "renda"])
        .assert()
        .success();

    contas(&dir)
        .args(["report", "monthly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mês: 03/2024"))
        .stdout(predicate::str::contains("Total_débito: R$ 1200.00"))
        .stdout(predicate::str::contains("Total_crédito: R$ 5000.00"));

    contas(&dir)
        .args(["report", "categories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Categoria: renda"))
        .stdout(predicate::str::contains("Total Crédito: R$ 5000.00"));

    let pdf = dir.path().join("saida.pdf");
    contas(&dir)
        .args(["report", "pdf", "--output"])
        .arg(&pdf)
        .assert()
        .success()
        .stdout(predicate::str::contains("Relatório salvo em"));

    let bytes = std::fs::read(&pdf).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn report_pdf_on_empty_ledger() {
    let dir = TempDir::new().unwrap();

    contas(&dir)
        .args(["report", "pdf"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nenhuma conta para gerar relatório."));

    assert!(!dir.path().join("relatorio_contas.pdf").exists());
}

#[test]
fn export_yaml() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("contas.yaml");

    contas(&dir)
        .args(["bill", "add", "débito", "Cinema", "20", "10/05/2024"])
        .assert()
        .success();

    contas(&dir)
        .arg("export")
        .arg(&output)
        .args(["--format", "yaml"])
        .assert()
        .success();

    let content = std::fs::read_to_string(&output).unwrap();
    assert!(content.contains("descricao: Cinema"));
    assert!(content.contains("bill_count: 1"));
}

#[test]
fn settings_file_changes_ledger_name() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("contas.json"),
        r#"{ "storage_file": "livro.csv", "audit_enabled": false }"#,
    )
    .unwrap();

    contas(&dir)
        .args(["bill", "add", "débito", "Água", "80", "20/03/2024"])
        .assert()
        .success();

    assert!(dir.path().join("livro.csv").exists());
    assert!(!dir.path().join("contas.csv").exists());
    assert!(!dir.path().join("contas_audit.log").exists());

    contas(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("livro.csv"))
        .stdout(predicate::str::contains("disabled"));
}
